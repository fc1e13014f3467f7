use intcalc::evaluate;
use proptest::prelude::*;

const MAX_OPERANDS: usize = 10;

#[derive(Clone, Copy, Debug)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), Just(Op::Sub), Just(Op::Mul), Just(Op::Div)]
}

/// Operands stay small so no intermediate result can overflow, and divisors
/// are never zero.
fn expression() -> impl Strategy<Value = (i64, Vec<(Op, i64)>)> {
    (
        0i64..100,
        proptest::collection::vec((op(), 1i64..40), 0..=MAX_OPERANDS),
    )
}

/// Evaluates with precedence by splitting into terms first.
fn reference(first: i64, rest: &[(Op, i64)]) -> i64 {
    let mut total = 0;
    let mut sign = 1;
    let mut term = first;

    for &(op, value) in rest {
        match op {
            Op::Mul => term *= value,
            Op::Div => term /= value,
            Op::Add | Op::Sub => {
                total += sign * term;
                sign = if let Op::Add = op { 1 } else { -1 };
                term = value;
            }
        }
    }

    total + sign * term
}

fn render(first: i64, rest: &[(Op, i64)], gaps: &[usize]) -> String {
    let mut out = first.to_string();
    let mut gaps = gaps.iter().cycle();

    for &(op, value) in rest {
        out.push_str(&" ".repeat(*gaps.next().unwrap_or(&0)));
        out.push(op.symbol());
        out.push_str(&" ".repeat(*gaps.next().unwrap_or(&0)));
        out.push_str(&value.to_string());
    }

    out
}

proptest! {
    #[test]
    fn evaluate_matches_precedence_reference((first, rest) in expression()) {
        let source = render(first, &rest, &[1]);
        prop_assert_eq!(evaluate(&source).unwrap(), reference(first, &rest));
    }

    #[test]
    fn whitespace_does_not_change_result(
        (first, rest) in expression(),
        gaps in proptest::collection::vec(0usize..4, 1..8),
        leading in 0usize..3,
        trailing in 0usize..3,
    ) {
        let compact = render(first, &rest, &[0]);
        let spaced = format!(
            "{}{}{}",
            " ".repeat(leading),
            render(first, &rest, &gaps),
            " ".repeat(trailing)
        );

        prop_assert_eq!(evaluate(&compact).unwrap(), evaluate(&spaced).unwrap());
    }

    #[test]
    fn evaluate_is_deterministic((first, rest) in expression()) {
        let source = render(first, &rest, &[1]);
        prop_assert_eq!(evaluate(&source), evaluate(&source));
    }

    #[test]
    fn arbitrary_input_never_panics(input in "[0-9 +*/$()-]{0,32}") {
        let _ = evaluate(&input);
    }
}
