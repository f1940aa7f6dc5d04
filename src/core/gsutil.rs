//! Thin wrapper around the `gsutil` command-line client.
//!
//! Every bucket operation goes through `gsutil`, treated as a black box:
//! paths in, exit status out. The existence check swallows all of gsutil's
//! output; the transfer operations leave the terminal attached so the
//! operator sees gsutil's own progress and diagnostics.

use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};

use color_eyre::eyre::{Result, WrapErr};

use crate::constants;

/// Handle on the `gsutil` installation used for all bucket operations.
#[derive(Debug, Clone)]
pub struct Gsutil {
    program: OsString,
}

impl Gsutil {
    /// Resolves the program from `CT4E_PROMOTE_GSUTIL`, falling back to
    /// `gsutil` on `$PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        let program = std::env::var_os(constants::GSUTIL_PROGRAM_ENV)
            .unwrap_or_else(|| OsString::from(constants::GSUTIL_PROGRAM));
        Self { program }
    }

    /// Uses a specific program instead of the environment's choice.
    #[must_use]
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Reports whether `location` has listable contents.
    ///
    /// `gsutil ls` exiting zero is the only signal for "exists"; every
    /// non-zero exit (not-found, but also permission or network trouble)
    /// reads as "does not exist". Both output streams are discarded.
    ///
    /// # Errors
    ///
    /// Fails only when the program cannot be spawned at all.
    pub fn location_exists(&self, location: &str) -> Result<bool> {
        let status = Command::new(&self.program)
            .args(["ls", location])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .wrap_err_with(|| self.spawn_failure())?;
        Ok(status.success())
    }

    /// Recursively copies the staged repo into the release location.
    ///
    /// # Errors
    ///
    /// Fails only when the program cannot be spawned; a gsutil-side failure
    /// comes back as a non-zero [`ExitStatus`].
    pub fn copy_recursive(&self, origin: &str, destination: &str) -> Result<ExitStatus> {
        self.passthrough(&["-m", "cp", "-R", origin, destination])
    }

    /// Recursively grants public read access on the release location.
    ///
    /// # Errors
    ///
    /// Fails only when the program cannot be spawned; a gsutil-side failure
    /// comes back as a non-zero [`ExitStatus`].
    pub fn grant_public_read(&self, destination: &str) -> Result<ExitStatus> {
        self.passthrough(&[
            "-m",
            "acl",
            "ch",
            "-R",
            "-u",
            constants::PUBLIC_READ_GRANT,
            destination,
        ])
    }

    /// Runs gsutil with the terminal attached, returning its exit status.
    fn passthrough(&self, args: &[&str]) -> Result<ExitStatus> {
        Command::new(&self.program)
            .args(args)
            .status()
            .wrap_err_with(|| self.spawn_failure())
    }

    fn spawn_failure(&self) -> String {
        format!(
            "failed to run {}; is the Cloud SDK installed and on PATH?",
            self.program.to_string_lossy()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_location_exists_on_zero_exit() {
        let gsutil = Gsutil::with_program("true");
        assert!(gsutil.location_exists("gs://anything").unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_location_missing_on_nonzero_exit() {
        let gsutil = Gsutil::with_program("false");
        assert!(!gsutil.location_exists("gs://anything").unwrap());
    }

    #[test]
    fn test_spawn_failure_is_a_hard_error() {
        let gsutil = Gsutil::with_program("ct4e-promote-no-such-program");
        let err = gsutil.location_exists("gs://anything").unwrap_err();
        assert!(err.to_string().contains("ct4e-promote-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn test_passthrough_reports_child_status() {
        let gsutil = Gsutil::with_program("false");
        let status = gsutil.copy_recursive("gs://a", "gs://b").unwrap();
        assert!(!status.success());
        assert_eq!(status.code(), Some(1));
    }

    #[test]
    fn test_program_resolution() {
        std::env::remove_var(constants::GSUTIL_PROGRAM_ENV);
        assert_eq!(Gsutil::from_env().program, constants::GSUTIL_PROGRAM);

        std::env::set_var(constants::GSUTIL_PROGRAM_ENV, "/opt/gcloud/bin/gsutil");
        assert_eq!(Gsutil::from_env().program, "/opt/gcloud/bin/gsutil");
        std::env::remove_var(constants::GSUTIL_PROGRAM_ENV);
    }
}
