use tl13c::symboltable::{Symbol, SymbolTable};
use tl13c::types::Type;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_creation() {
        let symbol = Symbol::new(Type::Int);
        assert_eq!(symbol.var_type, Type::Int);
        assert!(!symbol.initialized);
    }

    #[test]
    fn test_empty_table() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get("x").is_none());
    }

    #[test]
    fn test_declare_and_get() {
        let mut table = SymbolTable::new();
        table.declare("x", Symbol::new(Type::Int));

        let symbol = table.get("x").expect("x should be declared");
        assert_eq!(symbol.var_type, Type::Int);
        assert!(!symbol.initialized);
        assert!(table.contains("x"));
    }

    #[test]
    fn test_first_declaration_wins() {
        let mut table = SymbolTable::new();
        table.declare("x", Symbol::new(Type::Int));
        // A second declaration of the same name is silently dropped, even
        // with a conflicting type. This is deliberate current behavior.
        table.declare("x", Symbol::new(Type::Bool));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x").unwrap().var_type, Type::Int);
    }

    #[test]
    fn test_redeclaration_does_not_reset_initialized() {
        let mut table = SymbolTable::new();
        table.declare("x", Symbol::new(Type::Int));
        table.mark_initialized("x");
        table.declare("x", Symbol::new(Type::Int));

        assert!(table.get("x").unwrap().initialized);
    }

    #[test]
    fn test_mark_initialized() {
        let mut table = SymbolTable::new();
        table.declare("x", Symbol::new(Type::Int));
        assert!(!table.get("x").unwrap().initialized);

        table.mark_initialized("x");
        assert!(table.get("x").unwrap().initialized);
    }

    #[test]
    fn test_mark_initialized_unknown_name_is_noop() {
        let mut table = SymbolTable::new();
        table.mark_initialized("ghost");
        assert!(table.is_empty());
        assert!(table.get("ghost").is_none());
    }

    #[test]
    fn test_get_mut() {
        let mut table = SymbolTable::new();
        table.declare("x", Symbol::new(Type::Bool));

        {
            let symbol = table.get_mut("x").unwrap();
            symbol.initialized = true;
        }
        assert!(table.get("x").unwrap().initialized);
    }

    #[test]
    fn test_get_mut_on_nonexistent_symbol() {
        let mut table = SymbolTable::new();
        assert!(table.get_mut("nonexistent").is_none());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut table = SymbolTable::new();
        table.declare("first", Symbol::new(Type::Int));
        table.declare("second", Symbol::new(Type::Bool));
        table.declare("third", Symbol::new(Type::Int));

        let names: Vec<&str> = table.all_symbols().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_all_symbols_exposes_entries() {
        let mut table = SymbolTable::new();
        table.declare("x", Symbol::new(Type::Int));
        table.declare("b", Symbol::new(Type::Bool));
        table.mark_initialized("x");

        assert_eq!(table.all_symbols().count(), 2);
        let initialized = table
            .all_symbols()
            .filter(|(_, symbol)| symbol.initialized)
            .count();
        assert_eq!(initialized, 1);
    }

    #[test]
    fn test_print_symbols_functionality() {
        let mut table = SymbolTable::new();
        table.declare("x", Symbol::new(Type::Int));
        table.declare("flag", Symbol::new(Type::Bool));
        table.mark_initialized("flag");

        table.print_symbols(); // Should not panic
    }
}
