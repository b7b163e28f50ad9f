// Library entry exposing the re-indentation engine and CLI plumbing.
pub mod cli;
pub mod reformat;
