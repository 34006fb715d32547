// ============================================================================
// Commands
// Validated command model and its line-oriented text encoding
// ============================================================================
//
//   O <id> <symbol> <B|S> <quantity> <price>   place a limit order
//   X <id>                                     cancel a live order
//   P                                          print every book

use crate::domain::{OrderId, Quantity, Side, Symbol, SymbolError};
use crate::numeric::{NumericError, Price};
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("Unknown action type: {0}")]
    UnknownAction(String),
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("invalid order id: {0}")]
    InvalidId(String),
    #[error(transparent)]
    InvalidSymbol(#[from] SymbolError),
    #[error("Invalid side: {0}")]
    InvalidSide(String),
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error(transparent)]
    InvalidPrice(#[from] NumericError),
    #[error("Invalid order: unexpected trailing token {0}")]
    TrailingInput(String),
}

/// A command the router can execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place {
        id: OrderId,
        symbol: Symbol,
        side: Side,
        quantity: Quantity,
        price: Price,
    },
    Cancel {
        id: OrderId,
    },
    Print,
}

fn next_field<'a>(
    tokens: &mut SplitWhitespace<'a>,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    tokens.next().ok_or(ParseError::MissingField(name))
}

/// Unsigned decimal digits only; integer `FromStr` alone would admit a `+`
fn is_digits(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

fn parse_id(token: &str) -> Result<OrderId, ParseError> {
    match token.parse::<u32>() {
        Ok(id) if is_digits(token) => Ok(OrderId::new(id)),
        _ => Err(ParseError::InvalidId(token.to_string())),
    }
}

fn parse_side(token: &str) -> Result<Side, ParseError> {
    match token {
        "B" => Ok(Side::Buy),
        "S" => Ok(Side::Sell),
        other => Err(ParseError::InvalidSide(other.to_string())),
    }
}

fn parse_quantity(token: &str) -> Result<Quantity, ParseError> {
    match token.parse::<Quantity>() {
        Ok(quantity) if quantity > 0 && is_digits(token) => Ok(quantity),
        _ => Err(ParseError::InvalidQuantity(token.to_string())),
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();

        let command = match tokens.next() {
            None => return Err(ParseError::Empty),
            Some("O") => {
                let id = parse_id(next_field(&mut tokens, "order id")?)?;
                let symbol = Symbol::new(next_field(&mut tokens, "symbol")?)?;
                let side = parse_side(next_field(&mut tokens, "side")?)?;
                let quantity = parse_quantity(next_field(&mut tokens, "quantity")?)?;
                let price = next_field(&mut tokens, "price")?.parse::<Price>()?;
                Command::Place {
                    id,
                    symbol,
                    side,
                    quantity,
                    price,
                }
            },
            Some("X") => Command::Cancel {
                id: parse_id(next_field(&mut tokens, "order id")?)?,
            },
            Some("P") => Command::Print,
            Some(other) => return Err(ParseError::UnknownAction(other.to_string())),
        };

        match tokens.next() {
            Some(extra) => Err(ParseError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let command: Command = "O 10000 IBM B 10 100.00000 ".parse().unwrap();

        assert_eq!(
            command,
            Command::Place {
                id: OrderId::new(10000),
                symbol: Symbol::new("IBM").unwrap(),
                side: Side::Buy,
                quantity: 10,
                price: "100.00000".parse().unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_cancel_and_print() {
        assert_eq!(
            "X 10002".parse::<Command>(),
            Ok(Command::Cancel {
                id: OrderId::new(10002)
            })
        );
        assert_eq!("  P\t".parse::<Command>(), Ok(Command::Print));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        assert_eq!(
            "O 10000 IBM B 10 100.00000 beer".parse::<Command>(),
            Err(ParseError::TrailingInput("beer".to_string()))
        );
        assert_eq!(
            "X 10002 2198".parse::<Command>(),
            Err(ParseError::TrailingInput("2198".to_string()))
        );
        assert!("P 13".parse::<Command>().is_err());
    }

    #[test]
    fn test_malformed_commands_rejected() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!(
            "125 P 13".parse::<Command>(),
            Err(ParseError::UnknownAction("125".to_string()))
        );
        assert_eq!(
            "O 1 IBM".parse::<Command>(),
            Err(ParseError::MissingField("side"))
        );
        assert_eq!(
            "O 1 IBM Z 10 1.00000".parse::<Command>(),
            Err(ParseError::InvalidSide("Z".to_string()))
        );
        assert_eq!(
            "O 1 IBM BS 10 1.00000".parse::<Command>(),
            Err(ParseError::InvalidSide("BS".to_string()))
        );
        assert_eq!(
            "O 1 IBM B 0 1.00000".parse::<Command>(),
            Err(ParseError::InvalidQuantity("0".to_string()))
        );
        assert_eq!(
            "O 1 IBM B 65536 1.00000".parse::<Command>(),
            Err(ParseError::InvalidQuantity("65536".to_string()))
        );
        assert_eq!(
            "X -1".parse::<Command>(),
            Err(ParseError::InvalidId("-1".to_string()))
        );
        assert_eq!(
            "O 1 ABCDEFGHI B 10 1.00000".parse::<Command>(),
            Err(ParseError::InvalidSymbol(SymbolError::TooLong { len: 9 }))
        );
        assert_eq!(
            "O 1 IBM B 10 1.0".parse::<Command>(),
            Err(ParseError::InvalidPrice(NumericError::FractionalDigits {
                expected: 5,
                found: 1
            }))
        );
    }

    #[test]
    fn test_signed_numbers_rejected() {
        assert_eq!(
            "O +5 IBM B 10 1.00000".parse::<Command>(),
            Err(ParseError::InvalidId("+5".to_string()))
        );
        assert_eq!(
            "O 5 IBM B +10 1.00000".parse::<Command>(),
            Err(ParseError::InvalidQuantity("+10".to_string()))
        );
        assert_eq!(
            "X +7".parse::<Command>(),
            Err(ParseError::InvalidId("+7".to_string()))
        );
        assert_eq!(
            "O 5 IBM B 10 +1.00000".parse::<Command>(),
            Err(ParseError::InvalidPrice(NumericError::InvalidInput))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::UnknownAction("Z".to_string()).to_string(),
            "Unknown action type: Z"
        );
        assert_eq!(
            ParseError::from(SymbolError::TooLong { len: 9 }).to_string(),
            "symbol too long: 9 bytes (max 8)"
        );
    }
}
