//! # Console Loop
//!
//! Reads command lines, runs them, and writes one JSON object per line.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin / --script ──► Command::parse ──► dispatch ──► ConsoleLine       │
//! │                                                          │              │
//! │                               notifications drained ─────┤              │
//! │                                                          ▼              │
//! │                                                 stdout (JSON line)      │
//! │                                                                         │
//! │  {"ok":{"kind":"product_added",...},"notifications":[...]}             │
//! │  {"error":{"code":"VIEW_NOT_ACTIVE",...},"notifications":[]}           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr, so stdout carries nothing but responses.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, info};

use crate::commands::{self, Command, Response};
use crate::error::ApiError;
use crate::notify::Notification;
use crate::state::AppState;

/// One printed response.
#[derive(Debug, Serialize)]
pub struct ConsoleLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<Response>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub notifications: Vec<Notification>,
}

impl ConsoleLine {
    fn new(result: Result<Response, ApiError>, notifications: Vec<Notification>) -> Self {
        let (ok, error) = match result {
            Ok(response) => (Some(response), None),
            Err(err) => (None, Some(err)),
        };
        ConsoleLine {
            ok,
            error,
            notifications,
        }
    }
}

/// What the loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one line and returns the printed response, if any.
pub fn handle_line(app: &mut AppState, line: &str) -> (Option<ConsoleLine>, Flow) {
    let command = match Command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return (None, Flow::Continue),
        Err(err) => {
            debug!(line = %line, error = %err, "Unparseable line");
            return (
                Some(ConsoleLine::new(Err(err), app.notifier.drain())),
                Flow::Continue,
            );
        }
    };

    let flow = if command == Command::Quit {
        Flow::Quit
    } else {
        Flow::Continue
    };

    let result = commands::dispatch(app, command);
    (Some(ConsoleLine::new(result, app.notifier.drain())), flow)
}

/// Reads lines until end of input or `quit`.
pub fn run_console<R: BufRead, W: Write>(
    app: &mut AppState,
    reader: R,
    mut writer: W,
    pretty: bool,
) -> io::Result<()> {
    info!(market = %app.config.market.name, "Console started");

    for line in reader.lines() {
        let line = line?;
        let (output, flow) = handle_line(app, &line);

        if let Some(output) = output {
            let json = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }
            .map_err(io::Error::from)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }

        if flow == Flow::Quit {
            break;
        }
    }

    info!("Console finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::io::Cursor;

    fn run(script: &str) -> Vec<Value> {
        let mut app = AppState::default();
        let mut out = Vec::new();
        run_console(&mut app, Cursor::new(script), &mut out, false).unwrap();

        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_supplier_session() {
        let out = run("\
# add a product
start supplier
dialog open
set name Red Chili Powder
set price 200
set stock 40
submit
advance ORD001 confirmed
");
        assert_eq!(out.len(), 7);

        let added = &out[5];
        assert_eq!(added["ok"]["kind"], "product_added");
        assert_eq!(added["ok"]["id"], 4);
        assert_eq!(added["ok"]["status"], "active");
        assert_eq!(added["notifications"][0]["title"], "Product Added");

        let updated = &out[6];
        assert_eq!(updated["ok"]["order"]["status"], "confirmed");
        assert_eq!(
            updated["notifications"][0]["description"],
            "Order ORD001 status updated to confirmed"
        );
    }

    #[test]
    fn test_rejected_submit_prints_error_and_toast() {
        let out = run("tab supplier\nset name Ghee\nsubmit\n");

        let rejected = &out[2];
        assert!(rejected.get("ok").is_none());
        assert_eq!(rejected["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(rejected["notifications"][0]["variant"], "destructive");
    }

    #[test]
    fn test_wrong_tab_and_bad_lines() {
        let out = run("fav 1\nwibble\ntab vendor\nfav 1\n");

        assert_eq!(out[0]["error"]["code"], "VIEW_NOT_ACTIVE");
        assert_eq!(out[1]["error"]["code"], "PARSE_ERROR");
        assert_eq!(out[3]["ok"]["favorite"], true);
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = run("help\nquit\ntab vendor\n");

        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["ok"]["kind"], "help");
        assert_eq!(out[1]["ok"]["kind"], "quit");
    }
}
