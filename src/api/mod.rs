//! Per-endpoint operations of the Instamojo REST API.
//!
//! Each operation is a declarative instantiation of the request/response
//! cycle in [`crate::client`]: it supplies the method, the path, the
//! serialized body for writes, and the success status code, and names the
//! payload type to decode. No operation adds control flow beyond that.

pub mod payment_requests;
pub mod payments;
pub mod refunds;

/// All endpoint paths are rooted here.
pub(crate) const API_ROOT: &str = "/api/1.1";
