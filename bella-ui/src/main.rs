fn main() {
    bella_ui::mount();
}
