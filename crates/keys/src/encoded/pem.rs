//! PEM armour (RFC 7468) around opaque DER bytes

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use keyspec_api::error::validate;
use keyspec_api::{Error, Result};
use keyspec_params::utils::encoding::PEM_LINE_WIDTH;
use zeroize::Zeroizing;

const CONTEXT: &str = "PEM";

pub(super) fn encode(label: &str, der: &[u8]) -> String {
    let body = Zeroizing::new(STANDARD.encode(der));
    let capacity = body.len() + body.len() / PEM_LINE_WIDTH + 2 * label.len() + 40;
    let mut out = String::with_capacity(capacity);
    out.push_str("-----BEGIN ");
    out.push_str(label);
    out.push_str("-----\n");
    // base64 output is ASCII, so byte chunks are valid str slices
    for line in body.as_bytes().chunks(PEM_LINE_WIDTH) {
        out.push_str(core::str::from_utf8(line).unwrap_or_default());
        out.push('\n');
    }
    out.push_str("-----END ");
    out.push_str(label);
    out.push_str("-----\n");
    out
}

pub(super) fn decode(label: &str, document: &str) -> Result<Vec<u8>> {
    let begin = format!("-----BEGIN {}-----", label);
    let end = format!("-----END {}-----", label);

    let mut lines = document.lines().map(str::trim).filter(|line| !line.is_empty());
    validate::parameter(
        lines.next() == Some(begin.as_str()),
        CONTEXT,
        "missing or mismatched BEGIN line",
    )?;

    // pre-sized so pushes never reallocate and leave unwiped copies
    let mut body = Zeroizing::new(String::with_capacity(document.len()));
    let mut closed = false;
    for line in lines.by_ref() {
        if line == end {
            closed = true;
            break;
        }
        body.push_str(line);
    }
    validate::parameter(closed, CONTEXT, "missing or mismatched END line")?;
    validate::parameter(lines.next().is_none(), CONTEXT, "trailing data after END line")?;

    STANDARD.decode(body.as_bytes()).map_err(|e| {
        tracing::debug!(error = %e, "PEM body is not valid base64");
        Error::invalid(CONTEXT, e.to_string())
    })
}
