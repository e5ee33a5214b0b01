//! Extractors that report rejections through [`AppError`].
//!
//! Axum's stock `Json` and `Path` extractors answer malformed input with
//! plain-text bodies and assorted 4xx codes. These wrappers route every
//! rejection into the `{ "error": ... }` 400 shape the rest of the API uses.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. A missing content type, invalid syntax, or a body that
/// does not match `T` all become a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. A segment that does not parse as `T` (e.g. a
/// non-numeric id) becomes a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
