//! Speech recognition dataset adapter for Burn.
//!
//! A [`SpeechRecognitionDataset`](data::dataset::SpeechRecognitionDataset)
//! turns a corpus of cuts into indexable `{features, text}` training
//! examples. The corpus is anything implementing
//! [`Corpus`](domain::traits::Corpus); [`CutSet`](data::cut_set::CutSet)
//! is the manifest-backed implementation shipped here.

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;
