use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::char;
use nom::character::complete::digit1;
use nom::character::complete::i32 as integer;
use nom::character::complete::multispace0;
use nom::character::complete::one_of;
use nom::combinator::map;
use nom::combinator::map_opt;
use nom::combinator::map_res;
use nom::combinator::opt;
use nom::multi::separated_list0;
use nom::sequence::delimited;
use nom::sequence::terminated;
use nom::sequence::tuple;
use nom::IResult;
use thiserror::Error;

use super::Board;
use crate::constraints::Cage;
use crate::constraints::CageOperation;
use crate::constraints::Cell;

/// The number of characters of the offending input which are included in an error.
const ERROR_CONTEXT: usize = 40;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("malformed board near '{input}': {description}")]
    Malformed {
        input: Box<str>,
        description: Box<str>,
    },

    #[error("unexpected input after the board: '{0}'")]
    TrailingInput(Box<str>),
}

impl<'a> From<nom::Err<nom::error::Error<&'a str>>> for BoardParseError {
    fn from(value: nom::Err<nom::error::Error<&'a str>>) -> Self {
        match value {
            nom::Err::Incomplete(_) => unreachable!("not using any nom::streaming parsers"),
            nom::Err::Error(e) | nom::Err::Failure(e) => BoardParseError::Malformed {
                input: excerpt(e.input),
                description: e.code.description().into(),
            },
        }
    }
}

fn excerpt(input: &str) -> Box<str> {
    input.chars().take(ERROR_CONTEXT).collect::<String>().into()
}

pub(super) fn parse_board(source: &str) -> Result<Board, BoardParseError> {
    // BOARD := '(' SIZE ',' '[' CAGE* ']' ')'
    let (remainder, (size, cages)) = tuple_of2(size, list(cage))(source)?;

    let remainder = remainder.trim();
    if !remainder.is_empty() {
        return Err(BoardParseError::TrailingInput(excerpt(remainder)));
    }

    Ok(Board { size, cages })
}

fn cage(input: &str) -> IResult<&str, Cage> {
    // CAGE := '(' TARGET ',' '[' CELL* ']' ',' OPERATION ')'
    let (input, _) = symbol('(')(input)?;
    let (input, target) = token(integer)(input)?;
    let (input, _) = symbol(',')(input)?;
    let (input, cells) = list(cell)(input)?;
    let (input, _) = symbol(',')(input)?;
    let (input, operation) = token(operation)(input)?;
    let (input, _) = opt(symbol(','))(input)?;
    let (input, _) = symbol(')')(input)?;

    Ok((
        input,
        Cage {
            target,
            cells,
            operation,
        },
    ))
}

fn cell(input: &str) -> IResult<&str, Cell> {
    map(tuple_of2(size, size), |(row, col)| Cell { row, col })(input)
}

fn operation(input: &str) -> IResult<&str, CageOperation> {
    alt((
        map(tag("None"), |_| CageOperation::Unknown),
        map_opt(
            alt((
                delimited(char('"'), one_of("+-*/%?"), char('"')),
                delimited(char('\''), one_of("+-*/%?"), char('\'')),
            )),
            CageOperation::from_symbol,
        ),
    ))(input)
}

fn size(input: &str) -> IResult<&str, usize> {
    token(map_res(digit1, str::parse::<usize>))(input)
}

/// A parenthesised pair `(first, second)`, optionally with a trailing comma.
fn tuple_of2<'a, First, Second>(
    first: impl FnMut(&'a str) -> IResult<&'a str, First>,
    second: impl FnMut(&'a str) -> IResult<&'a str, Second>,
) -> impl FnMut(&'a str) -> IResult<&'a str, (First, Second)> {
    map(
        tuple((
            symbol('('),
            first,
            symbol(','),
            second,
            opt(symbol(',')),
            symbol(')'),
        )),
        |(_, first, _, second, _, _)| (first, second),
    )
}

/// A bracketed, comma-separated list which may end in a trailing comma.
fn list<'a, Element>(
    element: impl FnMut(&'a str) -> IResult<&'a str, Element>,
) -> impl FnMut(&'a str) -> IResult<&'a str, Vec<Element>> {
    delimited(
        symbol('['),
        terminated(separated_list0(symbol(','), element), opt(symbol(','))),
        symbol(']'),
    )
}

fn symbol<'a>(symbol: char) -> impl FnMut(&'a str) -> IResult<&'a str, char> {
    token(char(symbol))
}

fn token<'a, Output>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, Output>,
) -> impl FnMut(&'a str) -> IResult<&'a str, Output> {
    delimited(multispace0, parser, multispace0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Operation;

    #[test]
    fn sample_board_is_parsed() {
        let source = r#"(3, [(3,[(1,1), (2,1)],"+"),(1, [(1,2)], '?'), (8, [(1,3), (2,3), (2,2)], "+"), (3, [(3,1)], '?'), (3, [(3,2), (3,3)], "+")])"#;

        let board = parse_board(source).expect("valid board");

        assert_eq!(board.size, 3);
        assert_eq!(board.cages.len(), 5);
        assert_eq!(
            board.cages[0],
            Cage::new(3, [Cell::new(1, 1), Cell::new(2, 1)], Operation::Add)
        );
        assert_eq!(board.cages[1].operation, CageOperation::Unknown);
        assert_eq!(
            board.cages[2].cells,
            vec![Cell::new(1, 3), Cell::new(2, 3), Cell::new(2, 2)]
        );
    }

    #[test]
    fn none_is_an_unknown_operation() {
        let board = parse_board("(2, [(1, [(1, 1)], None)])").expect("valid board");

        assert_eq!(board.cages[0].operation, CageOperation::Unknown);
    }

    #[test]
    fn whitespace_and_trailing_commas_are_accepted() {
        let source = "\n( 4 ,\n  [ ( -2 , [ (1,1) , (1,2), ] , '-' , ) ,\n    (5, [(2,1),], \"%\"),\n  ],\n)\n";

        let board = parse_board(source).expect("valid board");

        assert_eq!(board.size, 4);
        assert_eq!(
            board.cages,
            vec![
                Cage::new(-2, [Cell::new(1, 1), Cell::new(1, 2)], Operation::Subtract),
                Cage::new(5, [Cell::new(2, 1)], Operation::Modulo),
            ]
        );
    }

    #[test]
    fn empty_cage_list_is_accepted() {
        let board = parse_board("(1, [])").expect("valid board");

        assert_eq!(board, Board::new(1, Vec::new()));
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let error = parse_board("(2, [(1, [(1, 1)], \"^\")])").expect_err("invalid operation");

        assert!(matches!(error, BoardParseError::Malformed { .. }));
    }

    #[test]
    fn trailing_input_is_rejected() {
        let error = parse_board("(1, []) (1, [])").expect_err("two boards");

        assert_eq!(error, BoardParseError::TrailingInput("(1, [])".into()));
    }

    #[test]
    fn printed_board_parses_back() {
        let source = "(3, [(3,[(1,1), (2,1)],\"+\"),(1, [(1,2)], '?'), (8, [(1,3), (2,3), (2,2)], \"+\"), (3, [(3,1)], '?'), (3, [(3,2), (3,3)], \"+\")])";
        let board = parse_board(source).expect("valid board");

        let printed = board.to_string();

        assert_eq!(parse_board(&printed), Ok(board));
    }
}
