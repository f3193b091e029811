use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;

use ldm_core::{reduce_precision, RenameContext};

use crate::collector::IdentCollector;
use crate::replacer::IdentReplacer;

type Result<T> = anyhow::Result<T>;

pub const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOption {
    /// Run the collect/rewrite passes. On by default.
    pub rename: bool,
    /// Decimal places kept by the precision pass; `None` disables it.
    pub precision: Option<usize>,
    /// Human-readable 4-space output instead of compact.
    pub formatted: bool,
}

impl Default for TransformOption {
    fn default() -> Self {
        Self {
            rename: true,
            precision: Some(DEFAULT_PRECISION),
            formatted: false,
        }
    }
}

#[derive(Debug)]
pub struct TransformOutput {
    pub content: String,
    /// Every (original, alias) pair recorded during the run, shortest
    /// alias first. Empty when renaming is disabled.
    pub mappings: Vec<(String, String)>,
}

fn serialize(document: &Value, formatted: bool) -> Result<String> {
    let buf = if formatted {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut ser)?;
        buf
    } else {
        serde_json::to_vec(document)?
    };

    Ok(String::from_utf8(buf)?)
}

/// load -> collect -> rewrite -> serialize -> reduce precision, over one
/// document held fully in memory. The alias table lives for this call
/// only.
pub fn transform(content: &str, options: &TransformOption) -> Result<TransformOutput> {
    let mut document: Value =
        serde_json::from_str(content).context("input is not valid JSON")?;

    if document.is_null() {
        bail!("input document is empty");
    }

    let mut ctx = RenameContext::new();

    if options.rename {
        IdentCollector::new(&mut ctx).collect(&document);
        debug!(allocated = ctx.allocated(), "identifier collection done");

        IdentReplacer::new(&ctx).rewrite(&mut document);
    }

    let mut text = serialize(&document, options.formatted)?;

    if let Some(digits) = options.precision {
        text = reduce_precision(&text, digits);
    }

    let mappings = ctx
        .mappings()
        .into_iter()
        .map(|(original, alias)| (original.clone(), alias.clone()))
        .collect();

    Ok(TransformOutput {
        content: text,
        mappings,
    })
}
