/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// HTTP request utilities with rate limiting and retry
pub mod http;
/// Request bodies and identifier normalisation
pub mod requests;
/// Response envelopes
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
