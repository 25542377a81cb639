use super::{check_finite, read_choice};
use crate::console::Console;
use crate::error::{DomainError, OperationResult};
use crate::ops;
use crate::runtime::context::CalcContext;
use crate::runtime::resolver::resolve;
use crate::ui::menu::SubMenu;

pub const MENU: SubMenu = SubMenu {
    title: "Trigonometric Operations",
    notes: &["NOTE: Angles are in degrees."],
    entries: &[
        "Sine (sin)",
        "Cosine (cos)",
        "Tangent (tan)",
        "Cotangent (cot)",
        "Hypotenuse (hyp, calculates c = sqrt(a^2 + b^2))",
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AngleOp {
    Sine,
    Cosine,
    Tangent,
    Cotangent,
}

impl AngleOp {
    fn name(self) -> &'static str {
        match self {
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::Cotangent => "cot",
        }
    }

    fn apply(self, deg: f64) -> Result<f64, DomainError> {
        match self {
            Self::Sine => Ok(ops::sine_deg(deg)),
            Self::Cosine => Ok(ops::cosine_deg(deg)),
            Self::Tangent => ops::tangent_deg(deg),
            Self::Cotangent => ops::cotangent_deg(deg),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrigOp {
    Angle(AngleOp),
    Hypotenuse,
}

const OPS: [TrigOp; 5] = [
    TrigOp::Angle(AngleOp::Sine),
    TrigOp::Angle(AngleOp::Cosine),
    TrigOp::Angle(AngleOp::Tangent),
    TrigOp::Angle(AngleOp::Cotangent),
    TrigOp::Hypotenuse,
];

pub fn run<C: Console>(ctx: &mut CalcContext<'_, C>) -> OperationResult {
    let choice = read_choice(ctx, &MENU)?;
    match OPS[choice - 1] {
        TrigOp::Angle(op) => angle(ctx, op),
        TrigOp::Hypotenuse => hypotenuse(ctx),
    }
}

fn angle<C: Console>(ctx: &mut CalcContext<'_, C>, op: AngleOp) -> OperationResult {
    let deg = resolve(ctx, "Enter the angle in degrees", true)?;
    let result = check_finite(ctx, op.apply(deg))?;
    ctx.console
        .emit_line(&format!("{}({deg:.4}°) = {result:.4}", op.name()));
    Ok(result)
}

fn hypotenuse<C: Console>(ctx: &mut CalcContext<'_, C>) -> OperationResult {
    let a = resolve(ctx, "Enter side a", true)?;
    let b = resolve(ctx, "Enter side b", true)?;
    let result = check_finite(ctx, Ok(ops::hypotenuse(a, b)))?;
    ctx.console.emit_line(&format!(
        "Hypotenuse of {a:.4} and {b:.4} is {result:.4}"
    ));
    Ok(result)
}
