use anyhow::{bail, Result};
use serde_json::json;

use crate::config::Config;
use crate::console::Console;
use crate::error::NoValue;
use crate::logging;
use crate::runtime::handlers::read_menu_choice;
use crate::runtime::{CalcContext, Category};
use crate::state::Memory;
use crate::ui::menu::{render_main_menu, MAIN_MENU_CHOICES};

const CLEAR_CHOICE: usize = 4;
const EXIT_CHOICE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Main-menu loop. The only owner of `Memory`, and so its only writer.
pub struct App<C: Console> {
    config: Config,
    memory: Memory,
    console: C,
}

impl<C: Console> App<C> {
    pub fn new(config: Config, console: C) -> Self {
        Self {
            config,
            memory: Memory::new(),
            console,
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs until the user exits or input ends. Fails once stdout is gone.
    pub fn run(&mut self) -> Result<()> {
        while self.step() == Flow::Continue {
            self.check_output()?;
        }
        self.check_output()
    }

    fn check_output(&self) -> Result<()> {
        if let Some(err) = self.console.output_error() {
            bail!("failed to write to the console: {err}");
        }
        Ok(())
    }

    fn step(&mut self) -> Flow {
        self.console.emit(&render_main_menu(&self.memory));
        let choice = {
            let mut ctx = self.context();
            read_menu_choice(&mut ctx, MAIN_MENU_CHOICES)
        };

        match choice {
            Ok(CLEAR_CHOICE) => {
                self.memory.clear();
                logging::emit_event("memory_clear", json!({ "memory": self.memory }));
                self.console
                    .emit_line("Calculator cleared. R and P reset to 0.");
                Flow::Continue
            }
            Ok(EXIT_CHOICE) => {
                self.console.emit_line("Exiting calculator. Goodbye!");
                Flow::Exit
            }
            Ok(choice) => match Category::from_choice(choice) {
                Some(category) => self.run_top_level(category),
                None => Flow::Continue,
            },
            Err(reason) => self.after_failure(reason),
        }
    }

    fn run_top_level(&mut self, category: Category) -> Flow {
        let outcome = {
            let mut ctx = self.context();
            category.invoke(&mut ctx)
        };

        match outcome {
            Ok(value) => {
                self.memory.update(value);
                logging::emit_event(
                    "memory_update",
                    json!({ "category": category, "memory": self.memory }),
                );
                self.console
                    .emit_line(&format!("-> Result stored as R: {value:.4}"));
                Flow::Continue
            }
            Err(reason) => self.after_failure(reason),
        }
    }

    fn after_failure(&mut self, reason: NoValue) -> Flow {
        match reason {
            NoValue::EndOfInput => {
                self.console.emit_line("\nEnd of input. Exiting calculator.");
                Flow::Exit
            }
            NoValue::OutputClosed => Flow::Exit,
            _ => Flow::Continue,
        }
    }

    fn context(&mut self) -> CalcContext<'_, C> {
        CalcContext::new(
            &mut self.console,
            &self.memory,
            self.config.max_nesting_depth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use std::io;

    fn run_app(script: &[&str]) -> App<ScriptedConsole> {
        let mut app = App::new(Config::default(), ScriptedConsole::from_lines(script));
        app.run().expect("scripted session runs");
        app
    }

    /// Scripted input with an output side that has already failed.
    struct ClosedOutput {
        input: ScriptedConsole,
        error: io::Error,
        writes: usize,
    }

    impl Console for ClosedOutput {
        fn emit(&mut self, _text: &str) {
            self.writes += 1;
        }

        fn next_token(&mut self) -> io::Result<Option<String>> {
            self.input.next_token()
        }

        fn discard_line(&mut self) {
            self.input.discard_line();
        }

        fn output_error(&self) -> Option<&io::Error> {
            Some(&self.error)
        }
    }

    #[test]
    fn test_successful_operations_shift_memory() {
        // 2.0 + 3.0 = 5, then 3.0 x 4.0 = 12
        let app = run_app(&["1", "1", "2.0", "3.0", "1", "3", "3.0", "4.0", "5"]);
        assert_eq!((app.memory().last(), app.memory().previous()), (12.0, 5.0));
        let transcript = app.console().transcript();
        assert!(transcript.contains("-> Result stored as R: 5.0000"));
        assert!(transcript.contains("Last Result (R): 12.0000 | Previous Result (P): 5.0000"));
        assert!(transcript.ends_with("Exiting calculator. Goodbye!\n"));
    }

    #[test]
    fn test_failed_operation_leaves_memory_untouched() {
        let app = run_app(&["1", "1", "2.0", "3.0", "1", "4", "1.0", "0", "5"]);
        assert_eq!((app.memory().last(), app.memory().previous()), (5.0, 0.0));
    }

    #[test]
    fn test_clear_resets_memory() {
        let app = run_app(&["1", "1", "2.0", "3.0", "4", "5"]);
        assert_eq!(*app.memory(), Memory::default());
        assert!(app
            .console()
            .transcript()
            .contains("Calculator cleared. R and P reset to 0."));
    }

    #[test]
    fn test_invalid_main_choice_redisplays_menu() {
        let app = run_app(&["9", "x", "5"]);
        let transcript = app.console().transcript();
        assert_eq!(transcript.matches("Enter your choice (1-5): ").count(), 3);
        assert!(transcript.contains("Invalid choice. Please enter a number between 1 and 5."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let app = run_app(&["1", "1"]);
        assert!(app
            .console()
            .transcript()
            .ends_with("End of input. Exiting calculator.\n"));
        assert_eq!(*app.memory(), Memory::default());
    }

    #[test]
    fn test_nested_result_is_not_stored_separately() {
        // add(nested sin(90), 2.5): only the outer 3.5 reaches memory
        let app = run_app(&["1", "1", "2", "1", "90", "2.5", "5"]);
        assert_eq!((app.memory().last(), app.memory().previous()), (3.5, 0.0));
    }

    #[test]
    fn test_closed_output_fails_the_run() {
        let console = ClosedOutput {
            input: ScriptedConsole::from_lines(&["4"; 64]),
            error: io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe"),
            writes: 0,
        };
        let mut app = App::new(Config::default(), console);

        let err = app.run().expect_err("a dead stdout must fail the run");
        assert!(err.to_string().contains("Broken pipe"));
        // one menu render, then the first read is refused
        assert_eq!(app.console().writes, 1);
    }

    #[test]
    fn test_invalid_utf8_at_main_menu_is_not_fatal() {
        let mut app = App::new(
            Config::default(),
            ScriptedConsole::from_bytes(b"\xff\n5\n".to_vec()),
        );
        app.run().expect("session runs");
        let transcript = app.console().transcript();
        assert!(transcript.contains("Invalid input. Please enter a number."));
        assert!(transcript.ends_with("Exiting calculator. Goodbye!\n"));
    }
}
