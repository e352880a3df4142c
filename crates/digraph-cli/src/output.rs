use digraph_core::{GraphErrorKind, OutputFormat};
use serde::Serialize;

use crate::context::{OpReport, OpValue};

const SEPARATOR: &str = "--------------";

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<GraphErrorKind>,
}

#[derive(Serialize)]
struct FailedOp<'a> {
    op: &'a str,
}

/// Writes results to stdout in the selected format, one result per line in
/// JSON mode and one block per result in text mode.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn report(&self, report: &OpReport) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let response = CliResponse {
                    success: true,
                    api_version: env!("CARGO_PKG_VERSION"),
                    data: Some(report),
                    error: None,
                    error_kind: None,
                };
                println!("{}", serde_json::to_string(&response)?);
            }
            OutputFormat::Text => {
                println!("> {}", report.op);
                match &report.result {
                    OpValue::Answer(true) => println!("yes"),
                    OpValue::Answer(false) => println!("no"),
                    OpValue::Nodes(nodes) => println!("{{{}}}", nodes.join(", ")),
                    OpValue::Graph(snapshot) => println!("{}", snapshot.rendered),
                }
                println!("{}", SEPARATOR);
            }
        }
        Ok(())
    }

    /// Report an operation the graph rejected; processing continues.
    pub fn failure(&self, op: &str, message: &str, kind: GraphErrorKind) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let response = CliResponse {
                    success: false,
                    api_version: env!("CARGO_PKG_VERSION"),
                    data: Some(FailedOp { op }),
                    error: Some(message.to_string()),
                    error_kind: Some(kind),
                };
                println!("{}", serde_json::to_string(&response)?);
            }
            OutputFormat::Text => {
                println!("> {}", op);
                println!("Caught error: {}", message);
                println!("{}", SEPARATOR);
            }
        }
        Ok(())
    }

    /// Narration for humans; omitted from JSON output.
    pub fn note(&self, text: &str) {
        if self.format == OutputFormat::Text {
            println!("{}", text);
        }
    }

    /// Outputs an error response to stderr and terminates the process.
    ///
    /// Exits with code 1 so shell scripts see the failure.
    pub fn fatal(&self, message: &str, kind: Option<GraphErrorKind>) -> ! {
        match self.format {
            OutputFormat::Json => {
                let response: CliResponse<()> = CliResponse {
                    success: false,
                    api_version: env!("CARGO_PKG_VERSION"),
                    data: None,
                    error: Some(message.to_string()),
                    error_kind: kind,
                };
                match serde_json::to_string(&response) {
                    Ok(json) => eprintln!("{}", json),
                    Err(_) => eprintln!("error: {}", message),
                }
            }
            OutputFormat::Text => eprintln!("error: {}", message),
        }
        std::process::exit(1);
    }
}
