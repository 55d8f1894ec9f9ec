use anyhow::Result;
use serde_json::json;

use crate::workflow::FlowReport;

/// Print a plain-text representation of the flow outcome.
pub(crate) fn print_plain(report: &FlowReport) {
	if !report.accepted {
		println!("Vault selection cancelled");
		return;
	}

	match &report.vault {
		Some(vault) => println!("{} ({})", vault.name, vault.path.display()),
		None => println!("No selection"),
	}
}

/// Format the flow outcome as a JSON string.
pub(crate) fn format_report_json(report: &FlowReport) -> Result<String> {
	let vault = match &report.vault {
		Some(vault) => json!({
			"name": vault.name,
			"path": vault.path,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": report.accepted,
		"vault": vault,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the flow outcome.
pub(crate) fn print_json(report: &FlowReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
