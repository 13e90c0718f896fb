use crate::error_handling::*;
use crate::scanning::*;
use std::str::FromStr;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
}

impl BinaryOperator {
    pub fn call(&self, left: f64, right: f64) -> Result<f64> {
        use BinaryOperator::*;

        match self {
            addition => Ok(left + right),
            subtraction => Ok(left - right),
            multiplication => Ok(left * right),
            division if right == 0.0 => Err(CalcError::division_by_zero),
            division => Ok(left / right),
        }
    }

    pub fn symbol(&self) -> char {
        use BinaryOperator::*;
        match self {
            addition => '+',
            subtraction => '-',
            multiplication => '*',
            division => '/',
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        use BinaryOperator::*;
        match s {
            "+" => Ok(addition),
            "-" => Ok(subtraction),
            "*" => Ok(multiplication),
            "/" => Ok(division),
            _ => Err(CalcError::invalid_operator(s.into())),
        }
    }
}

fn parse_number(token: &Token) -> Result<f64> {
    match token.kind {
        TokenKind::number => token
            .content
            .parse()
            .map_err(|_| CalcError::invalid_number(token.content.clone())),
        TokenKind::operator => Err(CalcError::invalid_number(token.content.clone())),
    }
}

#[derive(Debug, PartialEq)]
pub struct Step {
    pub operator: BinaryOperator,
    pub operand: f64,
}

/// A flat `number (operator number)*` chain read lazily from a scanner.
///
/// Steps are produced one at a time so that a caller applying them in order
/// stops at the first failing step, before later tokens are looked at.
pub struct Chain<S: Scanner> {
    source: S,
}

impl<S: Scanner> Chain<S> {
    /// Reads the leading number. Fails with `no_tokens` on an empty scanner.
    pub fn start(mut source: S) -> Result<(f64, Self)> {
        let first = source.take_current().ok_or(CalcError::no_tokens)?;
        let seed = parse_number(&first)?;
        Ok((seed, Self{source}))
    }

    fn read_step(&mut self) -> Option<Result<Step>> {
        let operator = self.source.take_current()?;
        let operand = match self.source.take_current() {
            None => return Some(Err(CalcError::missing_operand(operator.content))),
            Some(token) if token.kind == TokenKind::operator => {
                return Some(Err(CalcError::misplaced_operator(operator.content, token.content)))
            },
            Some(token) => token,
        };

        let step = match operator.kind {
            TokenKind::number => Err(CalcError::invalid_operator(operator.content)),
            TokenKind::operator => operator.content.parse::<BinaryOperator>(),
        }
        .and_then(|operator| -> Result<Step> {
            Ok(Step{operator, operand: parse_number(&operand)?})
        });
        Some(step)
    }
}

impl<S: Scanner> Iterator for Chain<S> {
    type Item = Result<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_step()
    }
}

pub fn parse(expression: &str) -> Result<(f64, Chain<RegexScanner>)> {
    let scanner = RegexScanner::new(expression);
    debug!(tokens = ?scanner.tokens(), "scanned");
    Chain::start(scanner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(expression: &str) -> Vec<Result<Step>> {
        let (_, chain) = parse(expression).unwrap();
        chain.collect()
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("+".parse::<BinaryOperator>(), Ok(BinaryOperator::addition));
        assert_eq!("/".parse::<BinaryOperator>(), Ok(BinaryOperator::division));
        assert_eq!(
            "^".parse::<BinaryOperator>(),
            Err(CalcError::invalid_operator("^".into()))
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(BinaryOperator::division.call(5.0, 0.0), Err(CalcError::division_by_zero));
        assert_eq!(BinaryOperator::division.call(0.0, 5.0), Ok(0.0));
        assert_eq!(BinaryOperator::division.call(1.0, 4.0), Ok(0.25));
    }

    #[test]
    fn test_chain_steps() {
        let (seed, chain) = parse("2+3*4").unwrap();
        assert_eq!(seed, 2.0);
        let steps: Vec<Step> = chain.map(|step| step.unwrap()).collect();
        assert_eq!(
            steps,
            [
                Step{operator: BinaryOperator::addition, operand: 3.0},
                Step{operator: BinaryOperator::multiplication, operand: 4.0},
            ]
        );
    }

    #[test]
    fn test_empty_and_leading_operator() {
        assert!(matches!(parse(""), Err(CalcError::no_tokens)));
        assert!(matches!(parse("+5"), Err(CalcError::invalid_number(op)) if op == "+"));
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(steps("5+"), [Err(CalcError::missing_operand("+".into()))]);
        assert_eq!(
            steps("5+*3")[0],
            Err(CalcError::misplaced_operator("+".into(), "*".into()))
        );
        assert_eq!(steps("3 5"), [Err(CalcError::missing_operand("5".into()))]);
        assert_eq!(steps("3 5 1")[0], Err(CalcError::invalid_operator("5".into())));
    }
}
