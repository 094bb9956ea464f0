use crate::models::ModuleGrid;

/// Symbol under construction: module values plus the function-module flags
/// that keep data placement and masking away from fixed patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    modules: ModuleGrid,
    function: ModuleGrid,
}

impl Canvas {
    /// All-light canvas with no function modules
    pub fn new(size: usize) -> Self {
        Self {
            modules: ModuleGrid::new(size),
            function: ModuleGrid::new(size),
        }
    }

    /// Modules per side
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// True if the module at (row, col) is dark
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.modules.get(row, col)
    }

    /// True if (row, col) is reserved for a function pattern
    pub fn is_function(&self, row: usize, col: usize) -> bool {
        self.function.get(row, col)
    }

    /// Write a function module and reserve it
    pub fn set_function(&mut self, row: usize, col: usize, dark: bool) {
        self.modules.set(row, col, dark);
        self.function.set(row, col, true);
    }

    /// Write a data module; function modules are left untouched
    pub fn set_data(&mut self, row: usize, col: usize, dark: bool) {
        debug_assert!(!self.is_function(row, col));
        if !self.is_function(row, col) {
            self.modules.set(row, col, dark);
        }
    }

    /// Invert the module at (row, col)
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.modules.toggle(row, col);
    }

    /// Count of modules left for data and ECC bits
    pub fn data_module_count(&self) -> usize {
        let size = self.size();
        size * size - self.function.dark_count()
    }

    /// Split into (modules, function flags)
    pub fn into_grids(self) -> (ModuleGrid, ModuleGrid) {
        (self.modules, self.function)
    }
}
