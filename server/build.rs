use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Portfolio</title></head>\
<body><p>The frontend has not been built yet. Run <code>trunk build --release</code> in <code>frontend/</code>.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static/");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("copy frontend/dist into static/");
    } else {
        let index = out_dir.join("dist").join("index.html");
        if !index.exists() {
            fs::create_dir_all(out_dir.join("dist")).expect("create static/dist");
            fs::write(&index, PLACEHOLDER).expect("write placeholder index.html");
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
