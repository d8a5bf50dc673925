fn main() {
    let values = vec![3, 1, 2];
    let doubled: Vec<i32> = values.iter().map(|v| v * 2).collect();
    let mut sorted = doubled.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    let report = || {
        println!("{sorted:?}");
    };
    report();
}
