fn main() {
    #[cfg(target_os = "windows")]
    win::generate_install_control();
}

#[cfg(target_os = "windows")]
mod win {
    use std::env;
    use std::path::PathBuf;

    /// Store installer namespace, absent from the `windows` crate projection
    const INSTALL_CONTROL: &str = "Windows.ApplicationModel.Store.Preview.InstallControl";

    pub(super) fn generate_install_control() {
        println!("cargo:rerun-if-changed=build.rs");

        let out_dir = env::var("OUT_DIR").expect("failed to get OUT_DIR");
        let out = PathBuf::from(out_dir).join("install_control.rs");
        let out = out.to_str().expect("OUT_DIR is not valid UTF-8");

        // Types outside the namespace come from the `windows` crate
        windows_bindgen::bindgen([
            "--out",
            out,
            "--filter",
            INSTALL_CONTROL,
            "--reference",
            "windows,skip-root,Windows.Foundation",
            "--reference",
            "windows,skip-root,Windows.Management",
            "--reference",
            "windows,skip-root,Windows.System",
            "--flat",
            "--no-allow",
        ]);
    }
}
