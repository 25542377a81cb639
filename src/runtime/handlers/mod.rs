mod conversion;
mod math;
mod trig;

use serde::Serialize;
use serde_json::json;
use std::str::FromStr;

use super::context::CalcContext;
use crate::console::Console;
use crate::error::{DomainError, NoValue, OperationResult};
use crate::logging;
use crate::ops::ensure_finite;
use crate::ui::menu::SubMenu;

/// The three operation menus reachable from the main menu or as nested operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Category {
    Math,
    Trig,
    Conversion,
}

impl Category {
    /// Maps main-menu choices 1-3 onto categories.
    pub fn from_choice(choice: usize) -> Option<Self> {
        match choice {
            1 => Some(Self::Math),
            2 => Some(Self::Trig),
            3 => Some(Self::Conversion),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Trig => "Trig",
            Self::Conversion => "Conversion",
        }
    }

    pub fn invoke<C: Console>(self, ctx: &mut CalcContext<'_, C>) -> OperationResult {
        let outcome = match self {
            Self::Math => math::run(ctx),
            Self::Trig => trig::run(ctx),
            Self::Conversion => conversion::run(ctx),
        };
        if let Ok(value) = &outcome {
            logging::emit_event(
                "operation_complete",
                json!({ "category": self, "depth": ctx.depth(), "value": *value }),
            );
        }
        outcome
    }
}

/// Shows `menu` and reads one choice. Invalid choices are not re-prompted.
fn read_choice<C: Console>(
    ctx: &mut CalcContext<'_, C>,
    menu: &SubMenu,
) -> Result<usize, NoValue> {
    ctx.console.emit(&menu.render());
    let back = menu.back_choice();
    let choice = read_menu_choice(ctx, back)?;
    if choice == back {
        return Err(NoValue::Back);
    }
    Ok(choice)
}

/// Reads a choice in `1..=max`, reporting anything else as `InvalidChoice`.
pub fn read_menu_choice<C: Console>(
    ctx: &mut CalcContext<'_, C>,
    max: usize,
) -> Result<usize, NoValue> {
    let token = ctx.read_line_token()?;
    let Ok(choice) = token.parse::<i64>() else {
        ctx.report_error("Invalid input. Please enter a number.");
        return Err(NoValue::InvalidChoice);
    };
    match usize::try_from(choice) {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice),
        _ => {
            ctx.report_error(&format!(
                "Invalid choice. Please enter a number between 1 and {max}."
            ));
            Err(NoValue::InvalidChoice)
        }
    }
}

/// Prompts for and parses one literal token; memory references are not accepted.
fn read_literal<C: Console, T: FromStr>(
    ctx: &mut CalcContext<'_, C>,
    prompt: &str,
) -> Result<T, NoValue> {
    ctx.console.emit(prompt);
    let token = ctx.next_token()?;
    match token.parse::<T>() {
        Ok(value) => Ok(value),
        Err(_) => {
            ctx.console.discard_line();
            ctx.report_error("Invalid input.");
            Err(NoValue::InvalidInput(token))
        }
    }
}

/// Reports a library error and turns it into a `NoValue`.
fn check<C: Console, T>(
    ctx: &mut CalcContext<'_, C>,
    result: Result<T, DomainError>,
) -> Result<T, NoValue> {
    result.map_err(|err| {
        logging::emit_event(
            "domain_error",
            json!({ "error": err.to_string(), "depth": ctx.depth() }),
        );
        ctx.report_error(&format!("Error: {err}"));
        NoValue::Domain(err)
    })
}

fn check_finite<C: Console>(
    ctx: &mut CalcContext<'_, C>,
    result: Result<f64, DomainError>,
) -> OperationResult {
    check(ctx, result.and_then(ensure_finite))
}
