use crate::parsing::{tokenize, Operator, Precedence, Token};
use error::EvalError;

pub mod error;

/// `Ok(None)` means the expression is incomplete: it is empty, starts or
/// ends with an operator, or has two operators (or two operands) in a row.
pub type EvalResult = Result<Option<i64>, EvalError>;

impl Operator {
    pub fn apply(&self, left: i64, right: i64) -> Result<i64, EvalError> {
        let value = match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide if right == 0 => {
                return Err(EvalError::DivisionByZero { dividend: left })
            }
            Operator::Divide => left.checked_div(right),
        };

        value.ok_or(EvalError::Overflow {
            operator: *self,
            left,
            right,
        })
    }
}

fn split_operands(tokens: &[Token]) -> Option<(i64, Vec<(Operator, i64)>)> {
    let (head, tail) = tokens.split_first()?;
    let first = i64::try_from(*head).ok()?;

    if tail.len() % 2 != 0 {
        return None;
    }

    let pairs = tail
        .chunks(2)
        .map(|pair| {
            let op = Operator::try_from(pair[0]).ok()?;
            let operand = i64::try_from(pair[1]).ok()?;
            Some((op, operand))
        })
        .collect::<Option<Vec<_>>>()?;

    Some((first, pairs))
}

/// Folds every `×`/`÷` run into a single term. A subtracted term is stored
/// negated and folded with `+`, so a run whose value is `i64::MIN` still fits.
/// `i64::MIN` itself cannot be negated and keeps `-` as its fold operator.
fn collapse_multiplicative(
    first: i64,
    pairs: Vec<(Operator, i64)>,
) -> Result<Vec<(Operator, i64)>, EvalError> {
    // The leading term is seeded with `+` so that the additive fold can start at zero.
    let mut terms = vec![(Operator::Add, first)];
    let mut negated = false;

    for (op, operand) in pairs {
        if op.precedence() == Precedence::Multiplicative {
            if let Some((_, term)) = terms.last_mut() {
                *term = op
                    .apply(*term, operand)
                    .map_err(|e| if negated { e.negate_left() } else { e })?;
                continue;
            }
        }

        let term = match (op, operand.checked_neg()) {
            (Operator::Subtract, Some(negative)) => (Operator::Add, negative),
            _ => (op, operand),
        };
        negated = term.0 != op;
        terms.push(term);
    }

    Ok(terms)
}

pub fn calculate_tokens(tokens: &[Token]) -> EvalResult {
    let (first, pairs) = match split_operands(tokens) {
        Some(operands) => operands,
        None => {
            log::debug!("Incomplete expression of {} tokens", tokens.len());
            return Ok(None);
        }
    };

    collapse_multiplicative(first, pairs)?
        .into_iter()
        .try_fold(0, |acc, (op, term)| op.apply(acc, term))
        .map(Some)
}

pub fn calculate(input: &str) -> EvalResult {
    let tokens = tokenize(input)?;
    calculate_tokens(&tokens)
}

#[macro_export]
macro_rules! calc_it {
    ($input:expr) => {
        $crate::evaluation::calculate($input).unwrap()
    };
}

#[cfg(test)]
mod tests {
    use crate::{
        evaluation::{calculate, calculate_tokens, error::EvalError},
        parse_it,
        parsing::Operator,
    };

    #[test]
    fn test_simple_addition() {
        assert_eq!(calc_it!("3 + 2"), Some(5));
        assert_eq!(calc_it!("1 + 1"), Some(2));
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(calc_it!("42"), Some(42));
        assert_eq!(calc_it!("-4"), Some(-4));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(calc_it!("2 + 3 × 4"), Some(14));
        assert_eq!(calc_it!("2 × 3 + 4"), Some(10));
        assert_eq!(calc_it!("10 - 6 ÷ 2"), Some(7));
        assert_eq!(calc_it!("1 + 2 × 3 × 4 - 5"), Some(20));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(calc_it!("8 - 3 - 2"), Some(3));
        assert_eq!(calc_it!("8 ÷ 4 ÷ 2"), Some(1));
        assert_eq!(calc_it!("8 ÷ 4 × 2"), Some(4));
        assert_eq!(calc_it!("2 - 5 + 1"), Some(-2));
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(calc_it!("7 ÷ 2"), Some(3));
        assert_eq!(calc_it!("-7 ÷ 2"), Some(-3));
    }

    #[test]
    fn test_incomplete_expressions() {
        assert_eq!(calc_it!(""), None);
        assert_eq!(calc_it!("3 +"), None);
        assert_eq!(calc_it!("+ 3"), None);
        assert_eq!(calc_it!("3 + + 2"), None);
        assert_eq!(calc_it!("3 2"), None);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            calculate("4 ÷ 0"),
            Err(EvalError::DivisionByZero { dividend: 4 })
        );
        assert_eq!(
            calculate("1 + 4 ÷ 0 - 3"),
            Err(EvalError::DivisionByZero { dividend: 4 })
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            calculate("9223372036854775807 + 1"),
            Err(EvalError::Overflow {
                operator: Operator::Add,
                left: i64::MAX,
                right: 1,
            })
        );
        assert!(matches!(
            calculate("-9223372036854775808 ÷ -1"),
            Err(EvalError::Overflow { operator: Operator::Divide, .. })
        ));
    }

    #[test]
    fn test_subtracted_product_reaching_min() {
        assert_eq!(calc_it!("0 - 4611686018427387904 × 2"), Some(i64::MIN));
        assert_eq!(calc_it!("-1 - -9223372036854775808"), Some(i64::MAX));
        assert_eq!(calc_it!("10 - 7 ÷ 2 × 3"), Some(1));
    }

    #[test]
    fn test_errors_in_subtracted_terms() {
        assert_eq!(
            calculate("1 - 4 ÷ 0"),
            Err(EvalError::DivisionByZero { dividend: 4 })
        );
        assert_eq!(
            calculate("0 - 9223372036854775807 × 2"),
            Err(EvalError::Overflow {
                operator: Operator::Multiply,
                left: i64::MAX,
                right: 2,
            })
        );
    }

    #[test]
    fn test_malformed_token() {
        assert_eq!(
            calculate("3 * 2"),
            Err(EvalError::MalformedToken("*".to_string()))
        );
    }

    #[test]
    fn test_calculate_tokens() {
        assert_eq!(calculate_tokens(&parse_it!("2 + 3 × 4")), Ok(Some(14)));
        assert_eq!(calculate_tokens(&[]), Ok(None));
    }
}
