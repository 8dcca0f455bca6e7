//! handlers/mod.rs
//! Módulo que agrupa los distintos handlers (contacto, chat).

pub mod chat_handler;
pub mod contact_handler;
