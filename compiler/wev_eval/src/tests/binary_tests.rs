//! Tests for binary operators.

use crate::binary::{evaluate_binary, evaluate_binary_entry};
use crate::test_helpers::{entry, Harness};
use crate::EvalOptions;
use pretty_assertions::assert_eq;
use wev_values::{
    AnyKind, BinaryOp, ClassName, EvalError, Interval, OutputSet, Value, WarningCause,
};

fn binary(left: Value, op: BinaryOp, right: Value) -> (Result<Value, EvalError>, Vec<WarningCause>) {
    let mut h = Harness::new();
    let result = evaluate_binary(&mut h.ctx(), &left, op, &right);
    (result, h.causes())
}

fn eval(left: Value, op: BinaryOp, right: Value) -> Value {
    binary(left, op, right).0.unwrap()
}

fn ints(start: i32, end: i32) -> Value {
    Value::IntInterval(Interval::new(start, end).unwrap())
}

fn floats(start: f64, end: f64) -> Value {
    Value::FloatInterval(Interval::new(start, end).unwrap())
}

const ANY_BOOL: Value = Value::Any(AnyKind::Boolean);

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_operand_without_numeric_prefix_is_zero() {
        assert_eq!(binary(Value::from("abc"), BinaryOp::Add, Value::Int(5)), (Ok(Value::Int(5)), vec![]));
    }

    #[test]
    fn scalar_operands() {
        assert_eq!(eval(Value::from("1.5"), BinaryOp::Add, Value::Int(1)), Value::Float(2.5));
        assert_eq!(eval(Value::from("0x1A"), BinaryOp::Add, Value::Int(1)), Value::Int(27));
        assert_eq!(eval(Value::Bool(true), BinaryOp::Add, Value::Bool(true)), Value::Int(2));
        assert_eq!(eval(Value::Undefined, BinaryOp::Sub, Value::Int(4)), Value::Int(-4));
        assert_eq!(eval(Value::Float(1.5), BinaryOp::Mul, Value::Int(2)), Value::Float(3.0));
    }

    #[test]
    fn integer_overflow_promotes_to_float() {
        assert_eq!(
            eval(Value::Int(i32::MAX), BinaryOp::Add, Value::Int(1)),
            Value::Float(2_147_483_648.0)
        );
        assert_eq!(
            eval(Value::Int(i32::MIN), BinaryOp::Sub, Value::Int(1)),
            Value::Float(-2_147_483_649.0)
        );
        assert_eq!(
            eval(Value::Int(65_536), BinaryOp::Mul, Value::Int(65_536)),
            Value::Float(4_294_967_296.0)
        );
    }

    #[test]
    fn division_is_integral_only_when_exact() {
        assert_eq!(eval(Value::Int(6), BinaryOp::Div, Value::Int(3)), Value::Int(2));
        assert_eq!(eval(Value::Int(7), BinaryOp::Div, Value::Int(2)), Value::Float(3.5));
        assert_eq!(
            eval(Value::Int(i32::MIN), BinaryOp::Div, Value::Int(-1)),
            Value::Float(2_147_483_648.0)
        );
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            binary(Value::Int(1), BinaryOp::Div, Value::Int(0)),
            (Ok(Value::Bool(false)), vec![WarningCause::DivisionByZero])
        );
        assert_eq!(
            binary(Value::Int(1), BinaryOp::Div, Value::Float(0.0)),
            (Ok(Value::Bool(false)), vec![WarningCause::DivisionByZero])
        );
        assert_eq!(
            binary(Value::Int(1), BinaryOp::Div, Value::Undefined),
            (Ok(Value::Bool(false)), vec![WarningCause::DivisionByZero])
        );
        for divisor in [ints(0, 2), Value::Any(AnyKind::Float), Value::Any(AnyKind::String)] {
            assert_eq!(
                binary(Value::Int(1), BinaryOp::Div, divisor),
                (Ok(Value::Any(AnyKind::Value)), vec![WarningCause::DivisionByZero])
            );
        }
    }

    #[test]
    fn ranges_use_corners() {
        assert_eq!(eval(ints(1, 3), BinaryOp::Add, ints(10, 20)), ints(11, 23));
        assert_eq!(eval(ints(1, 3), BinaryOp::Sub, ints(10, 20)), ints(-19, -7));
        assert_eq!(eval(ints(1, 3), BinaryOp::Mul, ints(-2, 2)), ints(-6, 6));
        assert_eq!(eval(ints(1, 4), BinaryOp::Div, Value::Int(2)), floats(0.5, 2.0));
        assert_eq!(eval(Value::Any(AnyKind::Boolean), BinaryOp::Add, Value::Int(1)), ints(1, 2));
        assert_eq!(
            eval(floats(0.5, 1.5), BinaryOp::Mul, Value::Int(2)),
            floats(1.0, 3.0)
        );
    }

    #[test]
    fn range_overflow_promotes_to_float_interval() {
        assert_eq!(
            eval(ints(2_147_483_646, i32::MAX), BinaryOp::Add, Value::Int(1)),
            floats(2_147_483_647.0, 2_147_483_648.0)
        );
    }

    #[test]
    fn abstract_operands() {
        assert_eq!(
            eval(Value::Any(AnyKind::Float), BinaryOp::Add, Value::Int(1)),
            Value::Any(AnyKind::Float)
        );
        assert_eq!(
            eval(Value::Any(AnyKind::String), BinaryOp::Mul, Value::Int(1)),
            Value::Any(AnyKind::Value)
        );
    }

    #[test]
    fn array_union_keeps_left_keys() {
        let mut h = Harness::new();
        let left = h.array(&[("0", Value::Int(1))]);
        let right = h.array(&[("0", Value::Int(9)), ("1", Value::Int(2))]);
        let union = evaluate_binary(&mut h.ctx(), &left, BinaryOp::Add, &right).unwrap();

        assert!(matches!(union, Value::Array(_)));
        assert!(union != left && union != right);
        assert_eq!(h.member(&union, "0"), entry([Value::Int(1)]));
        assert_eq!(h.member(&union, "1"), entry([Value::Int(2)]));
        assert!(h.causes().is_empty());
    }

    #[test]
    fn array_union_can_stay_abstract() {
        let mut h = Harness::with_options(EvalOptions::new().with_materialize_array_union(false));
        let left = h.array(&[]);
        let right = h.array(&[]);
        let result = evaluate_binary(&mut h.ctx(), &left, BinaryOp::Add, &right);
        assert_eq!(result, Ok(Value::Any(AnyKind::Array)));

        let mut h = Harness::new();
        let left = h.array(&[]);
        let result = evaluate_binary(&mut h.ctx(), &left, BinaryOp::Add, &Value::Any(AnyKind::Array));
        assert_eq!(result, Ok(Value::Any(AnyKind::Array)));
    }

    #[test]
    fn array_with_scalar_warns() {
        let mut h = Harness::new();
        let array = h.array(&[("0", Value::Int(1))]);
        let result = evaluate_binary(&mut h.ctx(), &array, BinaryOp::Sub, &Value::Int(1));
        assert_eq!(result, Ok(Value::Any(AnyKind::Value)));
        assert_eq!(h.causes(), vec![WarningCause::UnsupportedOperandTypes]);
        assert_eq!(
            h.warnings[0].message,
            "Unsupported operand types: array - integer"
        );

        let mut h = Harness::new();
        let array = h.array(&[]);
        let result = evaluate_binary(&mut h.ctx(), &array, BinaryOp::Add, &Value::Any(AnyKind::Value));
        assert_eq!(result, Ok(Value::Any(AnyKind::Value)));
        assert!(h.causes().is_empty());
    }

    #[test]
    fn object_operand_warns() {
        let mut h = Harness::new();
        let object = h.outset.create_object(&ClassName::std_class());
        let result = evaluate_binary(&mut h.ctx(), &object, BinaryOp::Mul, &Value::Int(2));
        assert_eq!(result, Ok(Value::Any(AnyKind::Value)));
        assert_eq!(h.causes(), vec![WarningCause::ObjectConvertedToInteger]);
    }
}

mod comparison {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loose_equality_of_scalars() {
        assert_eq!(eval(Value::Int(1), BinaryOp::Equal, Value::from("1")), Value::Bool(true));
        assert_eq!(eval(Value::Float(1.0), BinaryOp::Equal, Value::Int(1)), Value::Bool(true));
        assert_eq!(eval(Value::Int(1), BinaryOp::NotEqual, Value::Int(2)), Value::Bool(true));
        assert_eq!(eval(Value::from("a"), BinaryOp::LessThan, Value::from("b")), Value::Bool(true));
        assert_eq!(eval(Value::from("b"), BinaryOp::Equal, Value::from("b")), Value::Bool(true));
    }

    #[test]
    fn boolean_like_operands_compare_truthiness() {
        assert_eq!(eval(Value::Bool(true), BinaryOp::Equal, Value::Int(5)), Value::Bool(true));
        assert_eq!(eval(Value::Undefined, BinaryOp::Equal, Value::Int(0)), Value::Bool(true));
        assert_eq!(eval(ANY_BOOL, BinaryOp::Equal, Value::Int(1)), ANY_BOOL);
    }

    #[test]
    fn null_against_a_string_compares_as_empty_string() {
        assert_eq!(eval(Value::from("0"), BinaryOp::Equal, Value::Undefined), Value::Bool(false));
        assert_eq!(eval(Value::Undefined, BinaryOp::Equal, Value::from("0")), Value::Bool(false));
        assert_eq!(eval(Value::Undefined, BinaryOp::Equal, Value::from("")), Value::Bool(true));
        assert_eq!(eval(Value::Undefined, BinaryOp::LessThan, Value::from("x")), Value::Bool(true));
        assert_eq!(eval(Value::from("a"), BinaryOp::LessThanOrEqual, Value::Undefined), Value::Bool(false));
        assert_eq!(
            eval(Value::Undefined, BinaryOp::Equal, Value::Any(AnyKind::String)),
            ANY_BOOL
        );
    }

    #[test]
    fn ranges_decide_when_disjoint() {
        assert_eq!(eval(ints(1, 3), BinaryOp::LessThan, Value::Int(5)), Value::Bool(true));
        assert_eq!(eval(ints(1, 3), BinaryOp::LessThan, Value::Int(2)), ANY_BOOL);
        assert_eq!(eval(ints(1, 3), BinaryOp::GreaterThan, Value::Int(3)), Value::Bool(false));
        assert_eq!(eval(ints(1, 3), BinaryOp::GreaterThanOrEqual, Value::Int(1)), Value::Bool(true));
        assert_eq!(eval(ints(1, 3), BinaryOp::Equal, Value::Int(7)), Value::Bool(false));
        assert_eq!(eval(Value::Any(AnyKind::Integer), BinaryOp::LessThanOrEqual, Value::Int(0)), ANY_BOOL);
        assert_eq!(eval(Value::Any(AnyKind::String), BinaryOp::Equal, Value::Int(0)), ANY_BOOL);
    }

    #[test]
    fn arrays_are_greater_than_scalars() {
        let mut h = Harness::new();
        let array = h.array(&[]);
        let mut ctx = h.ctx();
        assert_eq!(
            evaluate_binary(&mut ctx, &array, BinaryOp::GreaterThan, &Value::Int(100)),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            evaluate_binary(&mut ctx, &Value::from("a"), BinaryOp::Equal, &array),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            evaluate_binary(&mut ctx, &array, BinaryOp::LessThanOrEqual, &array),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn objects() {
        let mut h = Harness::new();
        let object = h.outset.create_object(&ClassName::std_class());
        assert_eq!(
            evaluate_binary(&mut h.ctx(), &object, BinaryOp::Equal, &object),
            Ok(Value::Bool(true))
        );
        assert!(h.causes().is_empty());

        assert_eq!(
            evaluate_binary(&mut h.ctx(), &object, BinaryOp::Equal, &Value::Int(1)),
            Ok(ANY_BOOL)
        );
        assert_eq!(h.causes(), vec![WarningCause::ObjectConvertedToInteger]);
    }
}

mod identity {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn different_families_are_never_identical() {
        assert_eq!(eval(Value::Int(1), BinaryOp::Identical, Value::from("1")), Value::Bool(false));
        assert_eq!(
            eval(Value::Any(AnyKind::Integer), BinaryOp::Identical, Value::from("1")),
            Value::Bool(false)
        );
        assert_eq!(eval(Value::Undefined, BinaryOp::NotIdentical, Value::Int(0)), Value::Bool(true));
    }

    #[test]
    fn same_family_compares_values() {
        assert_eq!(eval(Value::Int(1), BinaryOp::Identical, Value::Int(1)), Value::Bool(true));
        assert_eq!(eval(Value::from("a"), BinaryOp::Identical, Value::from("b")), Value::Bool(false));
        assert_eq!(eval(Value::Undefined, BinaryOp::Identical, Value::Undefined), Value::Bool(true));
        assert_eq!(eval(Value::Any(AnyKind::String), BinaryOp::Identical, Value::from("a")), ANY_BOOL);
    }

    #[test]
    fn intervals_exclude_points() {
        assert_eq!(eval(ints(1, 3), BinaryOp::Identical, Value::Int(5)), Value::Bool(false));
        assert_eq!(eval(ints(1, 3), BinaryOp::Identical, Value::Int(2)), ANY_BOOL);
        assert_eq!(eval(ints(1, 3), BinaryOp::NotIdentical, Value::Int(5)), Value::Bool(true));
        assert_eq!(eval(ints(1, 3), BinaryOp::Identical, ints(4, 6)), Value::Bool(false));
    }

    #[test]
    fn floats_warn_unless_disabled() {
        assert_eq!(
            binary(Value::Float(1.0), BinaryOp::Identical, Value::Float(1.0)),
            (Ok(Value::Bool(true)), vec![WarningCause::FloatingPointIdentity])
        );

        let mut h = Harness::with_options(EvalOptions::new().with_warn_float_identity(false));
        let result =
            evaluate_binary(&mut h.ctx(), &Value::Float(1.0), BinaryOp::NotIdentical, &Value::Float(2.0));
        assert_eq!(result, Ok(Value::Bool(true)));
        assert!(h.causes().is_empty());
    }

    #[test]
    fn arrays_by_identity() {
        let mut h = Harness::new();
        let a = h.array(&[]);
        let b = h.array(&[]);
        let mut ctx = h.ctx();
        assert_eq!(evaluate_binary(&mut ctx, &a, BinaryOp::Identical, &a), Ok(Value::Bool(true)));
        assert_eq!(evaluate_binary(&mut ctx, &a, BinaryOp::Identical, &b), Ok(ANY_BOOL));
    }
}

mod modulo {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn points() {
        assert_eq!(eval(Value::Int(7), BinaryOp::Mod, Value::Int(3)), Value::Int(1));
        assert_eq!(eval(Value::Int(-7), BinaryOp::Mod, Value::Int(3)), Value::Int(-1));
        assert_eq!(eval(Value::Int(i32::MIN), BinaryOp::Mod, Value::Int(-1)), Value::Int(0));
        assert_eq!(eval(Value::from("7"), BinaryOp::Mod, Value::from("4")), Value::Int(3));
        assert_eq!(eval(Value::Float(7.9), BinaryOp::Mod, Value::Int(4)), Value::Int(3));
    }

    #[test]
    fn zero_divisors_warn() {
        assert_eq!(
            binary(Value::Int(5), BinaryOp::Mod, Value::Int(0)),
            (Ok(Value::Bool(false)), vec![WarningCause::DivisionByZero])
        );
        assert_eq!(
            binary(Value::Int(5), BinaryOp::Mod, ints(0, 2)),
            (Ok(Value::Any(AnyKind::Value)), vec![WarningCause::DivisionByZero])
        );
    }

    #[test]
    fn ranges_are_bounded_by_the_divisor() {
        assert_eq!(eval(ints(0, 10), BinaryOp::Mod, Value::Int(4)), ints(0, 3));
        assert_eq!(eval(ints(-10, 10), BinaryOp::Mod, Value::Int(4)), ints(-3, 3));
        assert_eq!(eval(ints(1, 2), BinaryOp::Mod, Value::Int(5)), ints(1, 2));
        assert_eq!(eval(Value::Int(7), BinaryOp::Mod, ints(2, 3)), ints(0, 2));
        assert_eq!(eval(Value::Any(AnyKind::Integer), BinaryOp::Mod, Value::Int(10)), ints(-9, 9));
    }
}

mod bitwise {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integer_operations() {
        assert_eq!(eval(Value::Int(6), BinaryOp::BitAnd, Value::Int(3)), Value::Int(2));
        assert_eq!(eval(Value::Int(6), BinaryOp::BitOr, Value::Int(3)), Value::Int(7));
        assert_eq!(eval(Value::Int(6), BinaryOp::BitXor, Value::Int(3)), Value::Int(5));
        assert_eq!(eval(Value::from("12"), BinaryOp::BitOr, Value::Bool(true)), Value::Int(13));
    }

    #[test]
    fn shift_counts_are_masked() {
        assert_eq!(eval(Value::Int(1), BinaryOp::ShiftLeft, Value::Int(33)), Value::Int(2));
        assert_eq!(eval(Value::Int(-8), BinaryOp::ShiftRight, Value::Int(1)), Value::Int(-4));
    }

    #[test]
    fn string_pairs_combine_into_strings() {
        let any_string = Value::Any(AnyKind::String);
        assert_eq!(eval(Value::from("a"), BinaryOp::BitAnd, Value::from("b")), any_string);
        assert_eq!(eval(Value::from("12"), BinaryOp::BitXor, Value::from("3")), any_string);
        assert_eq!(eval(any_string.clone(), BinaryOp::BitOr, any_string.clone()), any_string);
        assert_eq!(eval(Value::from("a"), BinaryOp::BitOr, any_string.clone()), any_string);
        assert_eq!(eval(Value::from("3"), BinaryOp::ShiftLeft, Value::from("2")), Value::Int(12));
    }

    #[test]
    fn unknown_operands() {
        assert_eq!(
            eval(Value::Any(AnyKind::Integer), BinaryOp::BitAnd, Value::Int(1)),
            Value::Any(AnyKind::Integer)
        );
        let mut h = Harness::new();
        let object = h.outset.create_object(&ClassName::std_class());
        let result = evaluate_binary(&mut h.ctx(), &object, BinaryOp::BitOr, &Value::Int(1));
        assert_eq!(result, Ok(Value::Any(AnyKind::Integer)));
        assert_eq!(h.causes(), vec![WarningCause::ObjectConvertedToInteger]);
    }
}

mod logical {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn xor_is_exclusive() {
        assert_eq!(eval(Value::Bool(true), BinaryOp::Xor, Value::Bool(true)), Value::Bool(false));
        assert_eq!(eval(Value::Bool(true), BinaryOp::Xor, Value::Int(0)), Value::Bool(true));
        assert_eq!(eval(Value::Bool(false), BinaryOp::Xor, ANY_BOOL), ANY_BOOL);
    }

    #[test]
    fn short_circuit_skips_the_right_operand() {
        assert_eq!(
            eval(Value::Bool(false), BinaryOp::And, Value::LambdaFunction(0)),
            Value::Bool(false)
        );
        assert_eq!(eval(Value::Int(0), BinaryOp::Or, ANY_BOOL), ANY_BOOL);
        assert!(matches!(
            binary(Value::Bool(true), BinaryOp::And, Value::LambdaFunction(0)).0,
            Err(EvalError::NotSupported { .. })
        ));
    }
}

#[test]
fn long_operands_are_not_supported() {
    assert!(matches!(
        binary(Value::Long(1), BinaryOp::Add, Value::Int(1)).0,
        Err(EvalError::NotSupported { .. })
    ));
    assert_eq!(
        eval(Value::Long(1), BinaryOp::Concat, Value::from("x")),
        Value::from("1x")
    );
}

#[test]
fn markers_are_invalid() {
    assert_eq!(
        binary(Value::Function("f".to_owned()), BinaryOp::Add, Value::Int(1)).0,
        Err(EvalError::InvalidExpressionValue { kind: "function" })
    );
    assert_eq!(
        binary(Value::Int(1), BinaryOp::Mul, Value::LambdaFunction(2)).0,
        Err(EvalError::InvalidExpressionValue { kind: "lambda function" })
    );
}

#[test]
fn entry_form_unions_the_cartesian_product() {
    let mut h = Harness::new();
    let left = entry([Value::Int(1), Value::Int(2)]);
    let right = entry([Value::Int(10), Value::Int(20)]);
    let result = evaluate_binary_entry(&mut h.ctx(), &left, BinaryOp::Add, &right);
    assert_eq!(
        result,
        Ok(entry([Value::Int(11), Value::Int(21), Value::Int(12), Value::Int(22)]))
    );

    let left = entry([Value::Bool(true)]);
    let right = entry([Value::Bool(false), ANY_BOOL]);
    let result = evaluate_binary_entry(&mut h.ctx(), &left, BinaryOp::And, &right);
    assert_eq!(result, Ok(entry([ANY_BOOL])));

    let result = evaluate_binary_entry(&mut h.ctx(), &left, BinaryOp::Concat, &right);
    assert_eq!(
        result,
        Ok(entry([Value::from("1"), Value::Any(AnyKind::String)]))
    );
}

mod proptests {
    #![allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]

    use super::*;
    use proptest::prelude::*;

    const OPS: [BinaryOp; 14] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::BitAnd,
        BinaryOp::ShiftLeft,
        BinaryOp::Equal,
        BinaryOp::LessThan,
        BinaryOp::GreaterThanOrEqual,
        BinaryOp::Identical,
        BinaryOp::NotIdentical,
        BinaryOp::Concat,
        BinaryOp::Xor,
    ];

    proptest! {
        #[test]
        fn degenerate_interval_behaves_like_its_point(
            n in -50_i32..50,
            m in -50_i32..50,
            op in prop::sample::select(OPS.to_vec()),
        ) {
            let point = binary(Value::Int(n), op, Value::Int(m));
            let degenerate = binary(ints(n, n), op, Value::Int(m));
            prop_assert_eq!(&point, &degenerate);
            let degenerate = binary(Value::Int(m), op, ints(n, n));
            prop_assert_eq!(binary(Value::Int(m), op, Value::Int(n)), degenerate);
        }

        #[test]
        fn integer_arithmetic_never_wraps(a in any::<i32>(), b in any::<i32>()) {
            let sum = eval(Value::Int(a), BinaryOp::Add, Value::Int(b));
            match sum {
                Value::Int(n) => prop_assert_eq!(Some(i64::from(n)), i64::from(a).checked_add(i64::from(b))),
                Value::Float(x) => prop_assert_eq!(x, f64::from(a) + f64::from(b)),
                other => prop_assert!(false, "unexpected sum {other}"),
            }
        }
    }
}
