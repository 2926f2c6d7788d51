#![no_main]
use libfuzzer_sys::fuzz_target;
use wordsieve::WordFilter;

fuzz_target!(|data: &[u8]| {
    if !data.is_empty() {
        let flags = data[0];
        let input = &data[1..];

        if let Ok(text) = std::str::from_utf8(input) {
            let mut filter = WordFilter::new();
            filter.with_censor_replacement(if flag(flags, 0) { '#' } else { '*' });

            let mut words = text.split_whitespace();
            for word in (&mut words).take(4) {
                let _ = filter.add_word(word);
            }
            let rest = words.collect::<Vec<_>>().join(" ");

            let censored = filter.censor(text);
            assert_eq!(censored.chars().count(), text.chars().count());

            let _ = filter.contains(&rest);
            let _ = filter.find(&rest);
            let _ = filter.censor(&rest);
        }
    }
});

fn flag(flags: u8, index: u8) -> bool {
    flags & (1 << index) != 0
}
