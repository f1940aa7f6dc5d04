//! The interactive promotion flow.
//!
//! Walks the operator through the release steps in strict sequence: collect
//! the staged-repo URL and the release version, refuse to clobber an existing
//! destination, then copy the repo and open it to public reads. All terminal
//! conversation goes through the injected reader/writer pair so the prompt
//! loops can be driven by tests.

use std::io::{BufRead, ErrorKind, Write};
use std::process::ExitStatus;

use color_eyre::eyre::{bail, Result};
use regex::Regex;

use crate::constants;
use crate::core::gsutil::Gsutil;

// ── Flow ────────────────────────────────────────────────────────────────────

/// Runs the whole promotion conversation and returns the process exit code:
/// `0` on success, `1` when the destination already exists, and the failed
/// `gsutil` invocation's own status when the copy or ACL step fails.
///
/// # Errors
///
/// Hard failures only: the input stream closing mid-prompt, a broken output
/// stream, or a `gsutil` that cannot be spawned.
pub fn run(gsutil: &Gsutil, input: &mut impl BufRead, out: &mut impl Write) -> Result<u8> {
    let origin = ask_repo_origin(input, out)?;
    let version = ask_version(input, out)?;
    let destination = release_destination(&version);

    if gsutil.location_exists(&destination)? {
        writeln!(out)?;
        writeln!(out, "#")?;
        writeln!(
            out,
            "# The destination directory already exists. If the version you"
        )?;
        writeln!(out, "# entered is correct, delete it first and try again.")?;
        writeln!(out, "#")?;
        writeln!(out, "# Command to delete:")?;
        writeln!(out, "# gsutil -m rm {destination}/**")?;
        return Ok(1);
    }

    // gsutil writes to the inherited terminal; keep the ordering sane.
    out.flush()?;

    let copy = gsutil.copy_recursive(&origin, &destination)?;
    if !copy.success() {
        return Ok(step_failed("cp", copy));
    }

    let acl = gsutil.grant_public_read(&destination)?;
    if !acl.success() {
        return Ok(step_failed("acl ch", acl));
    }

    writeln!(out)?;
    writeln!(out, "#")?;
    writeln!(out, "# Copy done! The repo URL for installation:")?;
    writeln!(out, "#")?;
    writeln!(out, "# {}", public_repo_url(&version))?;
    Ok(0)
}

/// Reports a failed gsutil step and converts its status to our exit code.
/// A signal-killed child has no code and maps to 1.
fn step_failed(step: &str, status: ExitStatus) -> u8 {
    eprintln!("# gsutil {step} failed ({status}).");
    status.code().map_or(1, |code| u8::try_from(code).unwrap_or(1))
}

// ── Prompts ─────────────────────────────────────────────────────────────────

/// Asks for the staged-repo URL until one contains a valid staged path.
///
/// The operator pastes the "Artifact location" URL from the `jar_signing`
/// success email; both the console browser form and the raw `gs://` form
/// carry the path this matches.
fn ask_repo_origin(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    let staged_repo = Regex::new(constants::STAGED_REPO_PATTERN)?;
    loop {
        writeln!(out)?;
        writeln!(out, "#")?;
        writeln!(out, "# Enter the GCS URL of the Kokoro-built repo.")?;
        writeln!(
            out,
            "# (\"Artifact location\" in the \"jar_signing\" success email.)"
        )?;
        write!(out, "{}", constants::PROMPT_URL)?;
        out.flush()?;

        let reply = read_reply(input)?;
        if let Some(origin) = staged_repo_origin(&staged_repo, &reply) {
            return Ok(origin);
        }
        writeln!(out, "{}", constants::MSG_WRONG_URL)?;
    }
}

/// Asks for the release version until it is a bare `MAJOR.MINOR.PATCH`.
fn ask_version(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    let release_version = Regex::new(constants::RELEASE_VERSION_PATTERN)?;
    loop {
        writeln!(out)?;
        writeln!(out, "#")?;
        writeln!(out, "# Enter the CT4E version (e.g., 9.9.9).")?;
        write!(out, "{}", constants::PROMPT_VERSION)?;
        out.flush()?;

        let reply = read_reply(input)?;
        if release_version.is_match(&reply) {
            return Ok(reply);
        }
        writeln!(out, "{}", constants::MSG_WRONG_VERSION)?;
    }
}

/// Reads one operator reply, stripping only the line terminator.
/// Surrounding spaces are preserved and a non-UTF-8 reply comes back
/// empty; the validators reject both.
fn read_reply(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => bail!("standard input closed while waiting for a reply"),
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::InvalidData => return Ok(String::new()),
        Err(err) => return Err(err.into()),
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

// ── Path building ───────────────────────────────────────────────────────────

/// Extracts the staged-repo path from `reply`, returning its `gs://` form.
fn staged_repo_origin(staged_repo: &Regex, reply: &str) -> Option<String> {
    staged_repo
        .find(reply)
        .map(|path| format!("{}{}", constants::GCS_SCHEME, path.as_str()))
}

/// Permanent home of a released version.
fn release_destination(version: &str) -> String {
    format!("{}/{version}", constants::RELEASE_BUCKET)
}

/// Public installation URL for a released version.
fn public_repo_url(version: &str) -> String {
    format!("{}/{version}", constants::PUBLIC_REPO_BASE_URL)
}
