//! The symbol table: predefined names, label bindings from pass one, and
//! dynamically allocated variable slots from pass two.

use std::collections::HashMap;

const FIRST_VARIABLE_ADDRESS: u16 = 16;

#[derive(Debug)]
pub struct SymbolTable {
    values: HashMap<String, u16>,
    next_variable: u16,
}

impl Default for SymbolTable {
    fn default() -> SymbolTable {
        SymbolTable::new()
    }
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        let mut values = HashMap::new();
        for n in 0..16u16 {
            values.insert(format!("R{}", n), n);
        }
        values.insert("SP".to_string(), 0);
        values.insert("LCL".to_string(), 1);
        values.insert("ARG".to_string(), 2);
        values.insert("THIS".to_string(), 3);
        values.insert("THAT".to_string(), 4);
        values.insert("SCREEN".to_string(), 16_384);
        values.insert("KBD".to_string(), 24_576);
        SymbolTable {
            values,
            next_variable: FIRST_VARIABLE_ADDRESS,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.values.get(name).copied()
    }

    /// Binds a label to a line number. Callers must check `contains` first —
    /// redefinition is rejected at the call site so the error can name the
    /// label and line.
    pub fn bind_label(&mut self, name: String, line: u16) {
        self.values.insert(name, line);
    }

    /// Allocates the next free RAM slot starting at 16 and binds `name` to
    /// it. First-occurrence order, pass-two only.
    pub fn allocate_variable(&mut self, name: String) -> u16 {
        let address = self.next_variable;
        self.next_variable += 1;
        self.values.insert(name, address);
        address
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn predefined_symbols_are_seeded() {
        let table = SymbolTable::new();
        assert_eq!(table.get("R0"), Some(0));
        assert_eq!(table.get("R15"), Some(15));
        assert_eq!(table.get("SCREEN"), Some(16_384));
        assert_eq!(table.get("KBD"), Some(24_576));
    }

    #[test]
    fn variables_allocate_from_16_upward_in_first_occurrence_order() {
        let mut table = SymbolTable::new();
        assert_eq!(table.allocate_variable("i".into()), 16);
        assert_eq!(table.allocate_variable("j".into()), 17);
    }

    #[test]
    fn labels_override_lookup_once_bound() {
        let mut table = SymbolTable::new();
        assert!(!table.contains("LOOP"));
        table.bind_label("LOOP".into(), 3);
        assert_eq!(table.get("LOOP"), Some(3));
    }
}
