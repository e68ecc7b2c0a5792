use winnow::combinator::{eof, opt, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

/// One rule line split into its positional fields, untrimmed and
/// uninterpreted. Field resolution (and its error reporting) happens in
/// [`super::parse`].
#[derive(Debug, PartialEq, Eq)]
pub(super) struct RawRule<'i> {
    pub weight: &'i str,
    pub unit: &'i str,
    pub operator: &'i str,
    pub price: &'i str,
    pub currency: Option<&'i str>,
}

// -- Fields -----------------------------------------------------------------

fn field<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| c != ',').parse_next(input)
}

// -- Rule line --------------------------------------------------------------

/// `weight,unit,operator,price[,currency]` -- exactly four or five
/// comma-separated fields spanning the whole line.
pub(super) fn rule_line<'i>(input: &mut &'i str) -> ModalResult<RawRule<'i>> {
    let weight = field.parse_next(input)?;
    ','.parse_next(input)?;
    let unit = field.parse_next(input)?;
    ','.parse_next(input)?;
    let operator = field.parse_next(input)?;
    ','.parse_next(input)?;
    let price = field.parse_next(input)?;
    let currency = opt(preceded(',', field)).parse_next(input)?;
    eof.parse_next(input)?;
    Ok(RawRule {
        weight,
        unit,
        operator,
        price,
        currency,
    })
}
