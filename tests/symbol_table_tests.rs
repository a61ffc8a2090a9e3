#[cfg(test)]
mod tests {
    use sigma_diagnostics::frontend::{LexerData, SymbolTable, Token};

    #[test]
    fn insert_and_get() {
        let mut table = SymbolTable::new();
        table.insert("counter", 1);
        table.insert("limit", 2);

        assert_eq!(table.get("counter"), Some(1));
        assert_eq!(table.get("limit"), Some(2));
        assert_eq!(table.get("missing"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn insert_replaces_existing_code() {
        let mut table = SymbolTable::new();
        table.insert("counter", 1);
        table.insert("counter", 9);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("counter"), Some(9));
    }

    #[test]
    fn iter_yields_every_entry() {
        let mut table = SymbolTable::new();
        table.insert("if", 10);
        table.insert("while", 11);
        table.insert("return", 12);

        let mut entries: Vec<(String, u32)> = table
            .iter()
            .map(|(lexeme, code)| (lexeme.to_string(), code))
            .collect();
        entries.sort();

        assert_eq!(
            entries,
            vec![
                ("if".to_string(), 10),
                ("return".to_string(), 12),
                ("while".to_string(), 11),
            ]
        );
    }

    #[test]
    fn empty_table() {
        let table = SymbolTable::new();

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.get("anything"), None);
    }

    #[test]
    fn lexer_data_starts_empty() {
        let data = LexerData::new();

        assert!(data.tokens.is_empty());
        assert!(data.identifiers.is_empty());
        assert!(data.constants.is_empty());
        assert!(data.keywords.is_empty());
    }

    #[test]
    fn lexer_data_carries_tokens_and_tables() {
        let mut data = LexerData::new();
        data.tokens.push(Token::new(5, "let", 1, 1));
        data.tokens.push(Token::new(1, "counter", 1, 5));
        data.keywords.insert("let", 5);
        data.identifiers.insert("counter", 1);

        assert_eq!(data.tokens.len(), 2);
        assert_eq!(data.keywords.get("let"), Some(5));
        assert_eq!(data.identifiers.get("counter"), Some(1));
    }
}
