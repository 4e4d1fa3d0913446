use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::UrlSigner;

/// Sign every URL before returning any of them
///
/// A single bad URL fails the whole batch, so callers never print a partial
/// list of signed URLs.
pub fn sign_all<S: AsRef<str>>(signer: &UrlSigner, urls: &[S]) -> crate::Result<Vec<String>> {
    urls.iter()
        .map(|url| {
            let url = url.as_ref();
            debug!(%url, "signing url");
            signer.sign_url(url)
        })
        .collect()
}

/// Write `label`, then read one trimmed line from `input`
pub fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> anyhow::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let name = label.trim_end_matches([':', ' ']);
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        warn!(prompt = name, "stdin closed before input");
        anyhow::bail!("no input for {}", name);
    }

    Ok(line.trim().to_string())
}
