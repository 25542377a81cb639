//! Operand resolution.
//!
//! An operand is a literal number, a memory reference (`R`/`P`), or a nested
//! operation (`1`/`2`/`3`) whose result stands in for the operand. A failed or
//! cancelled nested operation re-issues the same request; every other failure
//! goes back to the caller once.

use serde_json::json;

use super::context::CalcContext;
use super::handlers::Category;
use crate::console::Console;
use crate::error::{NoValue, OperationResult};
use crate::logging;
use crate::util::parse_finite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OperandToken {
    Last,
    Previous,
    Nested(Category),
    Literal,
}

impl OperandToken {
    fn classify(token: &str) -> Self {
        if token.eq_ignore_ascii_case("r") {
            return Self::Last;
        }
        if token.eq_ignore_ascii_case("p") {
            return Self::Previous;
        }
        match token {
            "1" => Self::Nested(Category::Math),
            "2" => Self::Nested(Category::Trig),
            "3" => Self::Nested(Category::Conversion),
            _ => Self::Literal,
        }
    }
}

pub fn resolve<C: Console>(
    ctx: &mut CalcContext<'_, C>,
    prompt: &str,
    allow_symbolic: bool,
) -> OperationResult {
    loop {
        emit_prompt(ctx, prompt, allow_symbolic);
        let token = ctx.read_line_token()?;

        if !allow_symbolic {
            return parse_literal(ctx, &token, allow_symbolic);
        }

        match OperandToken::classify(&token) {
            OperandToken::Last => {
                let value = ctx.memory.last();
                ctx.console
                    .emit_line(&format!("-> Using Last Result (R): {value:.4}"));
                return Ok(value);
            }
            OperandToken::Previous => {
                let value = ctx.memory.previous();
                ctx.console
                    .emit_line(&format!("-> Using Previous Result (P): {value:.4}"));
                return Ok(value);
            }
            OperandToken::Nested(_) if !ctx.can_nest() => {
                return Err(refuse_nesting(ctx));
            }
            OperandToken::Nested(category) => match run_nested(ctx, category) {
                Ok(value) => {
                    ctx.console
                        .emit_line(&format!("-> Nested Result: {value:.4} used as operand."));
                    return Ok(value);
                }
                Err(reason) if !reason.is_retryable() => return Err(reason),
                Err(reason) => {
                    logging::emit_event(
                        "nested_retry",
                        json!({
                            "prompt": prompt,
                            "category": category.label(),
                            "depth": ctx.depth(),
                            "reason": reason.to_string(),
                        }),
                    );
                    ctx.console.emit_line(
                        "\nNested operation failed or cancelled. Please re-enter the required operand.",
                    );
                }
            },
            OperandToken::Literal => return parse_literal(ctx, &token, allow_symbolic),
        }
    }
}

fn emit_prompt<C: Console>(ctx: &mut CalcContext<'_, C>, prompt: &str, allow_symbolic: bool) {
    let text = if allow_symbolic {
        format!(
            "{prompt} (or type 'R' for {:.4} / 'P' for {:.4}, or 1/2/3 for Nested Op): ",
            ctx.memory.last(),
            ctx.memory.previous()
        )
    } else {
        format!("{prompt}: ")
    };
    ctx.console.emit(&text);
}

/// Over-depth requests go back to the caller instead of being re-prompted.
fn refuse_nesting<C: Console>(ctx: &mut CalcContext<'_, C>) -> NoValue {
    let limit = ctx.max_depth();
    logging::emit_event("nesting_limit", json!({ "limit": limit }));
    ctx.report_error(&format!("Maximum nesting depth ({limit}) reached."));
    NoValue::DepthExceeded { limit }
}

fn run_nested<C: Console>(ctx: &mut CalcContext<'_, C>, category: Category) -> OperationResult {
    ctx.console.emit_line(&format!(
        "\n--- Nested Operation ({} selected) ---",
        category.label()
    ));
    if category == Category::Conversion {
        ctx.console.emit_line(
            "Warning: Number conversions are integer-based and may lose precision when used as floating-point operands.",
        );
    }
    ctx.nested(|ctx| category.invoke(ctx))
}

fn parse_literal<C: Console>(
    ctx: &mut CalcContext<'_, C>,
    token: &str,
    allow_symbolic: bool,
) -> OperationResult {
    match parse_finite(token) {
        Some(value) => Ok(value),
        None => {
            let message = if allow_symbolic {
                "Invalid input. Must be a number, 'R', 'P', or a nested menu choice (1, 2, or 3)."
            } else {
                "Invalid input. Must be a number."
            };
            ctx.report_error(message);
            Err(NoValue::InvalidInput(token.to_string()))
        }
    }
}
