#![doc = include_str!("../README.md")]

extern crate alloc;

mod config;
mod credential;
mod extraction;
mod http_client;
mod mime_type;
mod request;

pub use self::{
    config::{Config, ConfigError, SerializableConfig, compile_config, read_config},
    credential::Credential,
    extraction::{Extraction, Payload},
    http_client::{
        BareBody, BareConnection, BareHttpClient, BareRequest, BareResponse, HttpClient,
        HttpClientError, ReqwestHttpClient,
    },
    mime_type::content_type,
    request::{FilePart, RequestBody},
};
