//! Per-variant capacity tables: how many members each group may register.

use crate::models::FormVariant;

type GroupTable = &'static [(&'static str, u32)];
type AreaTable = &'static [(&'static str, GroupTable)];

const ARTE_PERSONAS: GroupTable = &[
    ("Campito sonoro", 0),
    ("Centro", 0),
    ("De Güan", 1),
    ("DES-BIO", 2),
    ("Domoláctico", 4),
    ("El Cuadro de Todes", 0),
    ("Estación de Chape y Pintura", 0),
    ("Estar", 0),
    ("Fuego Store", 0),
    ("Huasi", 4),
    ("IMAGO 🦋", 2),
    ("Iratorio", 2),
    ("JOYA", 6),
    ("Kairós phone", 1),
    ("Las Poderosas", 2),
    ("Le Kiosquite", 0),
    ("lo que el viento no se llevo", 1),
    ("mapacho", 5),
    ("Margarita", 0),
    ("Masajeadomo", 2),
    ("Memorial de Gazebos", 0),
    ("Microboliche Re Opening", 1),
    ("Misión Veleta ", 0),
    ("Nose ", 0),
    ("Observatorio Kairós", 0),
    ("ORIBOTO", 2),
    ("Ovni abductor", 2),
    ("Oxilum", 2),
    ("Pendufon", 1),
    ("Perla", 0),
    ("Prisma 53", 0),
    ("Qarxombra", 7),
    ("Salgan al Sol ", 2),
    ("SER-PUENTE", 6),
    ("SOMOS EL VIAJE", 2),
    ("Un Man", 3),
    ("VENUS", 0),
    ("VIRGEN FUEGO", 0),
];

const ARTE_PROVEEDORES: GroupTable = &[
    ("Campito sonoro", 30),
    ("Centro", 30),
    ("De Güan", 30),
    ("DES-BIO", 30),
    ("Domoláctico", 30),
    ("El Cuadro de Todes", 30),
    ("Estación de Chape y Pintura", 30),
    ("Estar", 30),
    ("Fuego Store", 30),
    ("Huasi", 30),
    ("IMAGO 🦋", 30),
    ("Iratorio", 30),
    ("JOYA", 30),
    ("Kairós phone", 30),
    ("Las Poderosas", 30),
    ("Le Kiosquite", 30),
    ("lo que el viento no se llevo", 30),
    ("mapacho", 30),
    ("Margarita", 30),
    ("Masajeadomo", 30),
    ("Memorial de Gazebos", 30),
    ("Microboliche Re Opening", 30),
    ("Misión Veleta ", 30),
    ("Nose ", 30),
    ("Observatorio Kairós", 30),
    ("ORIBOTO", 30),
    ("Ovni abductor", 30),
    ("Oxilum", 30),
    ("Pendufon", 30),
    ("Perla", 30),
    ("Prisma 53", 30),
    ("Qarxombra", 30),
    ("Salgan al Sol ", 30),
    ("SER-PUENTE", 30),
    ("SOMOS EL VIAJE", 30),
    ("Un Man", 30),
    ("VENUS", 30),
    ("VIRGEN FUEGO", 30),
];

const CAMPS_INGRESO: GroupTable = &[
    ("Cabra Camp", 2),
    ("Cafeteria", 2),
    ("Camp Tafies", 9),
    ("Dorado", 4),
    ("El Correo", 5),
    ("Entre Pares", 4),
    ("Familia Natural Camp", 8),
    ("Fresh", 8),
    ("HORUS ", 11),
    ("Industria Fuegina", 3),
    ("La Cantina", 7),
    ("Pi", 7),
    ("Pies en Libertad", 10),
    ("Planta Base Camp", 7),
    ("Pochocamp", 7),
    ("Purmalandia", 12),
    ("Sindicato de Sentidos", 6),
    ("vän", 0),
];

const CAMPS_LATE_CHECKOUT: GroupTable = &[
    ("Cabra Camp", 0),
    ("Cafeteria", 2),
    ("Camp Tafies", 8),
    ("Dorado", 0),
    ("El Correo", 0),
    ("Entre Pares", 0),
    ("Familia Natural Camp", 0),
    ("Fresh", 10),
    ("HORUS ", 12),
    ("Industria Fuegina", 0),
    ("La Cantina", 0),
    ("Pi", 6),
    ("Pies en Libertad", 10),
    ("Planta Base Camp", 0),
    ("Pochocamp", 4),
    ("Purmalandia", 15),
    ("Sindicato de Sentidos", 2),
    ("vän", 0),
];

const CAMPS_PROVEEDORES: GroupTable = &[
    ("Cabra Camp", 30),
    ("Cafeteria", 0),
    ("Camp Tafies", 30),
    ("Dorado", 0),
    ("El Correo", 30),
    ("Entre Pares", 0),
    ("Familia Natural Camp", 30),
    ("Fresh", 30),
    ("HORUS ", 30),
    ("Industria Fuegina", 30),
    ("La Cantina", 0),
    ("Pi", 30),
    ("Pies en Libertad", 30),
    ("Planta Base Camp", 0),
    ("Pochocamp", 30),
    ("Purmalandia", 30),
    ("Sindicato de Sentidos", 30),
    ("vän", 30),
];

const INFRA: GroupTable = &[("Infra", 30)];
const MAN: GroupTable = &[("Man", 30)];

static INGRESO_ANTICIPADO: AreaTable = &[
    ("Arte", ARTE_PERSONAS),
    ("Camps", CAMPS_INGRESO),
    ("Infra", INFRA),
    ("Man", MAN),
    ("Templo", &[("Aiko 2025", 15)]),
];

static INGRESO_ANTICIPADO_PROVEEDORES: AreaTable = &[
    ("Arte", ARTE_PROVEEDORES),
    ("Camps", CAMPS_PROVEEDORES),
    ("Infra", INFRA),
    ("Man", MAN),
    ("Templo", &[("Aiko 2025", 30)]),
];

static LATE_CHECKOUT: AreaTable = &[
    ("Arte", ARTE_PERSONAS),
    ("Camps", CAMPS_LATE_CHECKOUT),
    ("Infra", INFRA),
    ("Man", MAN),
    ("Templo", &[("Aiko 2025", 30)]),
];

static LATE_CHECKOUT_PROVEEDORES: AreaTable = &[
    ("Arte", ARTE_PROVEEDORES),
    ("Camps", CAMPS_PROVEEDORES),
    ("Infra", INFRA),
    ("Man", MAN),
    ("Templo", &[("Aiko 2025", 30)]),
];

/// Read-only `area -> group -> capacity` lookup for one form variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityTable {
    variant: FormVariant,
    areas: AreaTable,
}

impl CapacityTable {
    pub fn for_variant(variant: FormVariant) -> Self {
        let areas = match variant {
            FormVariant::IngresoAnticipado => INGRESO_ANTICIPADO,
            FormVariant::IngresoAnticipadoProveedores => INGRESO_ANTICIPADO_PROVEEDORES,
            FormVariant::LateCheckout => LATE_CHECKOUT,
            FormVariant::LateCheckoutProveedores => LATE_CHECKOUT_PROVEEDORES,
        };
        Self { variant, areas }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn lookup(&self, area: &str, group: &str) -> Option<u32> {
        self.group_table(area)?
            .iter()
            .find(|(name, _)| *name == group)
            .map(|(_, capacity)| *capacity)
    }

    /// Capacity for a pair; pairs outside the table count as closed (0).
    pub fn capacity(&self, area: &str, group: &str) -> u32 {
        match self.lookup(area, group) {
            Some(capacity) => capacity,
            None => {
                if !group.is_empty() {
                    tracing::warn!(
                        variant = %self.variant,
                        area,
                        group,
                        "group not present in capacity table, treating as closed"
                    );
                }
                0
            }
        }
    }

    pub fn is_group_open(&self, area: &str, group: &str) -> bool {
        self.capacity(area, group) > 0
    }

    pub fn areas(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.areas.iter().map(|(area, _)| *area)
    }

    /// Groups of `area` in display order with their capacity.
    pub fn groups(&self, area: &str) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.group_table(area)
            .unwrap_or(&[])
            .iter()
            .map(|(group, capacity)| (*group, *capacity))
    }

    fn group_table(&self, area: &str) -> Option<GroupTable> {
        self.areas
            .iter()
            .find(|(name, _)| *name == area)
            .map(|(_, groups)| *groups)
    }
}
