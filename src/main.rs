fn main() {
    compose_diff::run_cli();
}
