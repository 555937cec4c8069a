fn main() {
    // tests/blocksize.rs decides at compile time whether the privileged tests run
    println!("cargo:rerun-if-env-changed=LOSETUP_TEST_DEVICE");
}
