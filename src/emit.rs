// src/emit.rs

//! Rendering the assembled topology into the supervisor's document.
//!
//! The document is the PM2-compatible `{"apps": [...]}` JSON form, the
//! sole artifact this tool hands to the outside world. It goes to
//! stdout by default so the output can be piped straight into other
//! tooling; logs stay on stderr.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::topology::Topology;

/// Render the topology as pretty-printed JSON, newline-terminated.
pub fn render(topology: &Topology) -> Result<String> {
    let mut doc = serde_json::to_string_pretty(topology)?;
    doc.push('\n');
    Ok(doc)
}

/// Write the rendered document to `output`, or to stdout when `None`.
pub fn write(topology: &Topology, output: Option<&Path>) -> Result<()> {
    let doc = render(topology)?;
    match output {
        Some(path) => {
            std::fs::write(path, &doc)?;
            info!(path = %path.display(), "wrote supervisor document");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(doc.as_bytes())?;
            info!("wrote supervisor document to stdout");
        }
    }
    Ok(())
}
