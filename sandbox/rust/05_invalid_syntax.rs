fn main() {
    let f = || {
        let = ;
    };
}
