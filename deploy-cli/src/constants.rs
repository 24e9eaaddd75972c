// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The manifest used when `--manifest` is not given.
pub const DEFAULT_MANIFEST: &str = deploy_tools::core::manifest::FILENAME;
