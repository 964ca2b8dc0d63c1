//! Hack ALU tests.
