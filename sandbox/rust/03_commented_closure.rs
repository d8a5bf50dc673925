fn main() {
    let mut total = 0;
    let mut accumulate = || {
        // step 0
        total += 0;

        total += 1;
        // step 2
        total += 2;

        total += 3;
        // step 4
        total += 4;

        total += 5;
        // step 6
        total += 6;

        total += 7;
        // step 8
        total += 8;

        total += 9;
        // step 10
        total += 10;

        total += 11;
        // step 12
        total += 12;

        total += 13;
        // step 14
        total += 14;
        /*
         * Block comments spanning
         * several lines do not count.
         */
    };
    accumulate();
}
