mod cli;
mod shell;
