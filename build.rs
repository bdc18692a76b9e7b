use std::{env, fs};

// Pasa las variables de un .env local (API_BASE) al compilador como
// rustc-env, para que option_env! las vea. Sin .env se usan los defaults.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(".env") {
        Ok(c) => c,
        Err(_) => return,
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let (key, value) = (key.trim(), value.trim());
            // Una variable ya definida en el entorno tiene prioridad
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
