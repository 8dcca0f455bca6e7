//! config/mod.rs
//! Módulo raíz para configuración de la app.

pub mod mail_config;
