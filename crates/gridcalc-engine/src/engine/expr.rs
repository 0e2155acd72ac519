//! Flat arithmetic expression evaluation.
//!
//! Supports exactly the binary operators `+ - * /` over non-negative decimal
//! literals, with `*` and `/` resolved before `+` and `-`. No parentheses,
//! no unary minus, no further precedence tiers. These limits are part of the
//! formula language, not gaps to paper over.
//!
//! Failure is encoded in the returned value rather than raised: a malformed
//! token stream evaluates to NaN and division by zero to infinity, which
//! [`display_value`] maps to the `#ERROR!` and `#DIV/0!` sentinels.

use regex::Regex;

#[derive(Clone, Copy, Debug)]
enum Token {
    Num(f64),
    Op(char),
}

fn tokenize(expr: &str) -> Vec<Token> {
    // Anything the pattern does not match (whitespace included) is skipped.
    let re = Regex::new(r"[0-9]+\.?[0-9]*|[+\-*/]").unwrap();
    re.find_iter(expr)
        .map(|m| match m.as_str() {
            "+" => Token::Op('+'),
            "-" => Token::Op('-'),
            "*" => Token::Op('*'),
            "/" => Token::Op('/'),
            num => Token::Num(num.parse::<f64>().unwrap_or(f64::NAN)),
        })
        .collect()
}

/// Evaluate a flat arithmetic expression.
///
/// First pass resolves `*` and `/` left to right in place; second pass folds
/// the surviving `+`/`-` sequence. Returns NaN for a malformed stream and
/// infinity when any divisor is zero.
pub fn eval_flat_expr(expr: &str) -> f64 {
    let tokens = tokenize(expr);
    if tokens.is_empty() {
        return f64::NAN;
    }

    let mut reduced: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter();
    while let Some(token) = iter.next() {
        match token {
            Token::Op(op @ ('*' | '/')) => {
                let Some(Token::Num(lhs)) = reduced.pop() else {
                    return f64::NAN;
                };
                let Some(Token::Num(rhs)) = iter.next() else {
                    return f64::NAN;
                };
                if op == '/' && rhs == 0.0 {
                    return f64::INFINITY;
                }
                let value = if op == '/' { lhs / rhs } else { lhs * rhs };
                reduced.push(Token::Num(value));
            }
            other => reduced.push(other),
        }
    }

    let mut iter = reduced.into_iter();
    let Some(Token::Num(mut acc)) = iter.next() else {
        return f64::NAN;
    };
    loop {
        let op = match iter.next() {
            None => break,
            Some(Token::Op(op @ ('+' | '-'))) => op,
            Some(_) => return f64::NAN,
        };
        let Some(Token::Num(rhs)) = iter.next() else {
            return f64::NAN;
        };
        if acc.is_nan() || rhs.is_nan() {
            return f64::NAN;
        }
        if op == '+' {
            acc += rhs;
        } else {
            acc -= rhs;
        }
    }
    acc
}

/// Map an arithmetic outcome to its display string.
pub fn display_value(value: f64) -> String {
    if value.is_nan() {
        "#ERROR!".to_string()
    } else if value.is_infinite() {
        "#DIV/0!".to_string()
    } else {
        value.to_string()
    }
}
