use super::{check, check_finite, read_choice, read_literal};
use crate::console::Console;
use crate::error::{DomainError, OperationResult};
use crate::ops;
use crate::runtime::context::CalcContext;
use crate::runtime::resolver::resolve;
use crate::ui::menu::SubMenu;

pub const MENU: SubMenu = SubMenu {
    title: "Mathematical Operations",
    notes: &[],
    entries: &[
        "Add (+)",
        "Subtract (-)",
        "Multiply (x)",
        "Divide (÷)",
        "Remainder (%)",
        "Exponential (exp(x))",
        "Logarithmic (log(x))",
        "Absolute value of input (sqrt(x^2))",
        "Power (x^y)",
        "Factorial (n!)",
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    fn apply(self, a: f64, b: f64) -> Result<f64, DomainError> {
        match self {
            Self::Add => Ok(ops::add(a, b)),
            Self::Subtract => Ok(ops::subtract(a, b)),
            Self::Multiply => Ok(ops::multiply(a, b)),
            Self::Divide => ops::divide(a, b),
            Self::Power => Ok(ops::power(a, b)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UnaryOp {
    Exponential,
    Logarithm,
    Absolute,
}

impl UnaryOp {
    fn apply(self, x: f64) -> Result<f64, DomainError> {
        match self {
            Self::Exponential => Ok(ops::exponential(x)),
            Self::Logarithm => ops::logarithm(x),
            Self::Absolute => Ok(ops::abs_square_root(x)),
        }
    }

    fn describe(self, x: f64, result: f64) -> String {
        match self {
            Self::Exponential => format!("exp({x:.4}) = {result:.4}"),
            Self::Logarithm => format!("log({x:.4}) = {result:.4}"),
            Self::Absolute => format!("|{x:.4}| (sqrt(x^2)) = {result:.4}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MathOp {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Remainder,
    Factorial,
}

/// Indexed by menu choice minus one.
const OPS: [MathOp; 10] = [
    MathOp::Binary(BinaryOp::Add),
    MathOp::Binary(BinaryOp::Subtract),
    MathOp::Binary(BinaryOp::Multiply),
    MathOp::Binary(BinaryOp::Divide),
    MathOp::Remainder,
    MathOp::Unary(UnaryOp::Exponential),
    MathOp::Unary(UnaryOp::Logarithm),
    MathOp::Unary(UnaryOp::Absolute),
    MathOp::Binary(BinaryOp::Power),
    MathOp::Factorial,
];

pub fn run<C: Console>(ctx: &mut CalcContext<'_, C>) -> OperationResult {
    let choice = read_choice(ctx, &MENU)?;
    match OPS[choice - 1] {
        MathOp::Binary(op) => binary(ctx, op),
        MathOp::Unary(op) => unary(ctx, op),
        MathOp::Remainder => remainder(ctx),
        MathOp::Factorial => factorial(ctx),
    }
}

fn binary<C: Console>(ctx: &mut CalcContext<'_, C>, op: BinaryOp) -> OperationResult {
    let a = resolve(ctx, "Enter the first number (a)", true)?;
    let b = resolve(ctx, "Enter the second number (b)", true)?;
    let result = check_finite(ctx, op.apply(a, b))?;
    ctx.console
        .emit_line(&format!("{a:.4} {} {b:.4} = {result:.4}", op.symbol()));
    Ok(result)
}

fn unary<C: Console>(ctx: &mut CalcContext<'_, C>, op: UnaryOp) -> OperationResult {
    let x = resolve(ctx, "Enter a single number (x)", true)?;
    let result = check_finite(ctx, op.apply(x))?;
    ctx.console.emit_line(&op.describe(x, result));
    Ok(result)
}

fn factorial<C: Console>(ctx: &mut CalcContext<'_, C>) -> OperationResult {
    let n: i64 = read_literal(ctx, "Enter a non-negative integer (n): ")?;
    ctx.console.discard_line();
    let result = check(ctx, ops::factorial(n))?;
    ctx.console.emit_line(&format!("{n}! = {result}"));
    Ok(result as f64)
}

fn remainder<C: Console>(ctx: &mut CalcContext<'_, C>) -> OperationResult {
    ctx.console.emit_line(
        "Enter two integers (a % b) - Note: R/P/Nested Op is NOT available for integer-only input.",
    );
    let a: i64 = read_literal(ctx, "Enter the first integer (a): ")?;
    let b: i64 = read_literal(ctx, "Enter the second integer (b): ")?;
    ctx.console.discard_line();
    let result = check(ctx, ops::remainder(a, b))?;
    ctx.console.emit_line(&format!("{a} % {b} = {result}"));
    Ok(result as f64)
}
