/// Split text into chunks for the extraction call, never inside a word.
///
/// Words accumulate until the space-joined candidate reaches `max_size`, then
/// the chunk is sealed and accumulation restarts. The budget is measured in
/// characters of the joined chunk, not model tokens. A single word longer
/// than `max_size` still comes out as its own chunk, and a non-empty trailing
/// accumulation is emitted even when below the budget.
pub fn split_into_chunks(text: &str, max_size: usize) -> Vec<String> {
    let mut chunks: Vec<String> = vec![];
    let mut current_chunk: Vec<&str> = vec![];
    let mut current_len = 0;

    for word in text.split_whitespace() {
        current_len = match current_chunk.is_empty() {
            true => word.len(),
            false => current_len + 1 + word.len(),
        };
        current_chunk.push(word);

        if current_len >= max_size {
            chunks.push(current_chunk.join(" "));
            current_chunk.clear();
        }
    }

    if !current_chunk.is_empty() {
        chunks.push(current_chunk.join(" "));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::split_into_chunks;

    #[test]
    fn rejoined_chunks_preserve_the_word_sequence() {
        let text = "Acme Corp reduced scope one emissions by twelve percent last year \
                    and moved its warehouses to renewable electricity contracts";
        let chunks = split_into_chunks(text, 25);

        let rejoined = chunks.join(" ");
        let original_words: Vec<&str> = text.split_whitespace().collect();
        let rejoined_words: Vec<&str> = rejoined.split_whitespace().collect();

        assert_eq!(rejoined_words, original_words);
    }

    #[test]
    fn no_chunk_is_empty_and_all_but_last_reach_the_budget() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = split_into_chunks(text, 12);

        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(!chunk.is_empty());
        }
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.len() >= 12);
        }
    }

    #[test]
    fn word_longer_than_budget_is_emitted_whole() {
        let chunks = split_into_chunks("supercalifragilisticexpialidocious", 10);

        assert_eq!(chunks, vec!["supercalifragilisticexpialidocious"]);
    }

    #[test]
    fn trailing_words_become_a_final_short_chunk() {
        let chunks = split_into_chunks("alpha beta gamma delta tail", 11);

        assert_eq!(chunks, vec!["alpha beta gamma", "delta tail"]);
    }

    #[test]
    fn empty_text_produces_no_chunks() {
        assert!(split_into_chunks("", 100).is_empty());
        assert!(split_into_chunks("   \n\t  ", 100).is_empty());
    }

    #[test]
    fn identical_input_always_chunks_the_same_way() {
        let text = "repeatable chunking for a fixed corpus text and budget";
        assert_eq!(split_into_chunks(text, 20), split_into_chunks(text, 20));
    }
}
