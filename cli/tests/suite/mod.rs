mod commands;
mod stdin;
