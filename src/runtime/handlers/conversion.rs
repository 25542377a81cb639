use super::{check, read_choice};
use crate::console::Console;
use crate::error::{NoValue, OperationResult};
use crate::ops;
use crate::runtime::context::CalcContext;
use crate::runtime::resolver::resolve;
use crate::ui::menu::SubMenu;

pub const MENU: SubMenu = SubMenu {
    title: "Number System Conversions",
    notes: &["Note: String input conversions (Bin/Hex) do NOT support R/P/Nested Ops."],
    entries: &[
        "Dec to Bin",
        "Bin to Dec",
        "Dec to Hex",
        "Hex to Dec",
        "Hex to Bin (Intermediate)",
        "Bin to Hex (Intermediate)",
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConversionOp {
    DecToBin,
    BinToDec,
    DecToHex,
    HexToDec,
    HexToBin,
    BinToHex,
}

const OPS: [ConversionOp; 6] = [
    ConversionOp::DecToBin,
    ConversionOp::BinToDec,
    ConversionOp::DecToHex,
    ConversionOp::HexToDec,
    ConversionOp::HexToBin,
    ConversionOp::BinToHex,
];

/// Every conversion yields its decimal value as the operation result.
pub fn run<C: Console>(ctx: &mut CalcContext<'_, C>) -> OperationResult {
    let choice = read_choice(ctx, &MENU)?;
    let op = OPS[choice - 1];
    let dec = match op {
        ConversionOp::DecToBin | ConversionOp::DecToHex => from_decimal(ctx, op)?,
        _ => from_digits(ctx, op)?,
    };
    Ok(dec as f64)
}

fn from_decimal<C: Console>(ctx: &mut CalcContext<'_, C>, op: ConversionOp) -> Result<i64, NoValue> {
    let value = resolve(ctx, "Enter Decimal number (will be truncated to integer)", true)?;
    // Truncates toward zero and saturates at the i64 bounds.
    let dec = value as i64;
    let line = match op {
        ConversionOp::DecToHex => format!("Hexadecimal: {}", ops::dec_to_hex(dec)),
        _ => format!("Binary: {}", ops::dec_to_bin(dec)),
    };
    ctx.console.emit_line(&line);
    Ok(dec)
}

fn from_digits<C: Console>(ctx: &mut CalcContext<'_, C>, op: ConversionOp) -> Result<i64, NoValue> {
    ctx.console.emit("Enter the number string: ");
    let digits = ctx.read_line_token()?;

    let (dec, converted) = match op {
        ConversionOp::BinToDec => (check(ctx, ops::bin_to_dec(&digits))?, None),
        ConversionOp::HexToDec => (check(ctx, ops::hex_to_dec(&digits))?, None),
        ConversionOp::HexToBin => {
            let (dec, bin) = check(ctx, ops::hex_to_bin(&digits))?;
            (dec, Some(format!("Binary: {bin}")))
        }
        _ => {
            let (dec, hex) = check(ctx, ops::bin_to_hex(&digits))?;
            (dec, Some(format!("Hexadecimal: {hex}")))
        }
    };

    ctx.console.emit_line(&format!("Decimal: {dec}"));
    if let Some(line) = converted {
        ctx.console.emit_line(&line);
    }
    Ok(dec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::console::ScriptedConsole;
    use crate::state::Memory;

    fn run_script(script: &[&str], memory: &Memory) -> (OperationResult, ScriptedConsole) {
        let mut console = ScriptedConsole::from_lines(script);
        let result = {
            let mut ctx = CalcContext::new(&mut console, memory, 4);
            run(&mut ctx)
        };
        (result, console)
    }

    #[test]
    fn test_menu_and_ops_table_agree() {
        assert_eq!(MENU.entries.len(), OPS.len());
        assert_eq!(MENU.back_choice(), 7);
    }

    #[test]
    fn test_decimal_input_is_truncated() {
        let (result, console) = run_script(&["1", "10.9"], &Memory::new());
        assert_eq!(result, Ok(10.0));
        assert!(console.transcript().contains("Binary: 1010"));

        let (result, console) = run_script(&["3", "-1.5"], &Memory::new());
        assert_eq!(result, Ok(-1.0));
        assert!(console.transcript().contains("Hexadecimal: FFFFFFFFFFFFFFFF"));
    }

    #[test]
    fn test_decimal_input_accepts_memory_reference() {
        let mut memory = Memory::new();
        memory.update(255.0);
        let (result, console) = run_script(&["3", "R"], &memory);
        assert_eq!(result, Ok(255.0));
        assert!(console.transcript().contains("Hexadecimal: FF"));
    }

    #[test]
    fn test_digit_strings_convert_to_decimal() {
        let (result, console) = run_script(&["2", "101101"], &Memory::new());
        assert_eq!(result, Ok(45.0));
        assert!(console.transcript().contains("Decimal: 45"));

        let (result, _) = run_script(&["4", "ff"], &Memory::new());
        assert_eq!(result, Ok(255.0));
    }

    #[test]
    fn test_intermediate_conversions_show_decimal() {
        let (result, console) = run_script(&["5", "1A"], &Memory::new());
        assert_eq!(result, Ok(26.0));
        assert!(console.transcript().contains("Decimal: 26\nBinary: 11010\n"));

        let (result, console) = run_script(&["6", "11111111"], &Memory::new());
        assert_eq!(result, Ok(255.0));
        assert!(console.transcript().contains("Decimal: 255\nHexadecimal: FF\n"));
    }

    #[test]
    fn test_invalid_digits_report_error() {
        let (result, console) = run_script(&["2", "1021"], &Memory::new());
        assert_eq!(
            result,
            Err(NoValue::Domain(DomainError::InvalidBinaryDigit('2')))
        );
        assert!(console
            .transcript()
            .contains("Error: Invalid binary digit '2'."));
    }

    #[test]
    fn test_binary_of_minus_one_is_accepted() {
        let (result, _) = run_script(&["2", "-1"], &Memory::new());
        assert_eq!(result, Ok(-1.0));
    }
}
