//! Surface hints about where ffmpeg-sys-next will look for FFmpeg.

use std::{env, path::Path};

const WATCHED: [&str; 3] = ["FFMPEG_DIR", "PKG_CONFIG_PATH", "VCPKG_ROOT"];

fn main() {
    for variable in WATCHED {
        println!("cargo:rerun-if-env-changed={variable}");
    }

    if let Some(dir) = env::var_os("FFMPEG_DIR") {
        let dir = Path::new(&dir);
        if !dir.join("include").is_dir() {
            println!(
                "cargo:warning=FFMPEG_DIR={} has no include/ directory; FFmpeg headers will not be found.",
                dir.display()
            );
        }
        return;
    }

    // pkg-config covers the other targets.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    match env::var_os("VCPKG_ROOT") {
        Some(root) => {
            let triplet = env::var("VCPKGRS_TRIPLET").unwrap_or_else(|_| "x64-windows".into());
            let installed = Path::new(&root).join("installed").join(triplet);
            if installed.is_dir() {
                println!(
                    "cargo:warning=Using FFmpeg from vcpkg at {}; set FFMPEG_DIR to pin it.",
                    installed.display()
                );
            } else {
                println!(
                    "cargo:warning=No vcpkg FFmpeg install at {}.",
                    installed.display()
                );
            }
        }
        None => println!(
            "cargo:warning=Neither FFMPEG_DIR nor VCPKG_ROOT is set; install FFmpeg with vcpkg or point FFMPEG_DIR at an FFmpeg build."
        ),
    }
}
