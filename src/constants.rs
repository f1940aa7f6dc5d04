//! Application-wide constants and fixed storage-layout literals.
//!
//! Everything the tool must agree on with the outside world lives here: the
//! staging and release bucket layout, the public download host, and the exact
//! prompt and rejection strings of the operator conversation. Keeping them in
//! one place makes them auditable against the actual bucket layout without
//! reading any control flow.

// === Storage Layout ===

/// URL scheme for Google Cloud Storage paths.
pub const GCS_SCHEME: &str = "gs://";

/// Pattern locating a staged Kokoro repo inside a pasted URL.
///
/// Matches the staging bucket path followed by an ASCII-digit build ID and a
/// timestamp-like directory, anchored at the end of the input, e.g.
/// `kokoro-ct4e-release/prod/google-cloud-eclipse/ubuntu/jar_signing/34/20180323-215548`.
pub const STAGED_REPO_PATTERN: &str =
    r"kokoro-ct4e-release/prod/google-cloud-eclipse/ubuntu/jar_signing/[0-9]+/[0-9-]+$";

/// Permanent release bucket; versions live directly under it.
pub const RELEASE_BUCKET: &str = "gs://cloud-tools-for-eclipse";

/// Public HTTPS base serving the release bucket's contents.
pub const PUBLIC_REPO_BASE_URL: &str = "https://storage.googleapis.com/cloud-tools-for-eclipse";

/// Exact shape of a CT4E release version: `MAJOR.MINOR.PATCH` in ASCII
/// digits, nothing else.
pub const RELEASE_VERSION_PATTERN: &str = r"^[0-9]+\.[0-9]+\.[0-9]+$";

// === External Tool ===

/// Storage utility invoked for every bucket operation.
pub const GSUTIL_PROGRAM: &str = "gsutil";

/// Environment variable overriding the `gsutil` program path.
pub const GSUTIL_PROGRAM_ENV: &str = "CT4E_PROMOTE_GSUTIL";

/// Grantee handed to `gsutil acl ch` to make the released repo world-readable.
pub const PUBLIC_READ_GRANT: &str = "AllUsers:R";

// === Prompts & Messages ===

/// Inline prompt for the staged-repo URL.
pub const PROMPT_URL: &str = "URL? ";
/// Inline prompt for the release version.
pub const PROMPT_VERSION: &str = "Version? ";
/// Rejection line for input without a recognizable staged-repo path.
pub const MSG_WRONG_URL: &str = "Wrong URL. Try again.";
/// Rejection line for a malformed version string.
pub const MSG_WRONG_VERSION: &str = "Wrong format. Try again.";
