use std::collections::HashMap;

use ride_ast::RideVersion;

/// Native function costs charged for V2 scripts, keyed by opcode.
const V2_NATIVE_COSTS: &[(i16, u64)] = &[
    (0, 1),
    (1, 1),
    (2, 1),
    (100, 1),
    (101, 1),
    (102, 1),
    (103, 1),
    (104, 1),
    (105, 1),
    (106, 1),
    (107, 1),
    (200, 1),
    (201, 1),
    (202, 1),
    (203, 10),
    (300, 10),
    (303, 1),
    (304, 1),
    (305, 1),
    (400, 2),
    (401, 2),
    (410, 1),
    (411, 1),
    (412, 1),
    (420, 1),
    (421, 1),
    (500, 100),
    (501, 10),
    (502, 10),
    (503, 10),
    (600, 10),
    (601, 10),
    (602, 10),
    (603, 10),
    (1000, 100),
    (1001, 100),
    (1003, 100),
    (1040, 10),
    (1041, 10),
    (1042, 10),
    (1043, 10),
    (1050, 100),
    (1051, 100),
    (1052, 100),
    (1053, 100),
    (1060, 100),
];

/// User function costs charged for V2 scripts. Type constructor cost
/// equals the constructor's arity.
const V2_USER_COSTS: &[(&str, u64)] = &[
    ("throw", 2),
    ("addressFromString", 124),
    ("!=", 26),
    ("isDefined", 35),
    ("extract", 13),
    ("dropRightBytes", 19),
    ("takeRightBytes", 19),
    ("takeRight", 19),
    ("dropRight", 19),
    ("!", 11),
    ("-", 9),
    ("getInteger", 10),
    ("getBoolean", 10),
    ("getBinary", 10),
    ("getString", 10),
    ("addressFromPublicKey", 82),
    ("wavesBalance", 109),
    ("Address", 1),
    ("Alias", 1),
    ("DataEntry", 2),
];

/// Native functions introduced in V3.
const V3_NATIVE_EXTENSIONS: &[(i16, u64)] = &[
    (108, 100),
    (109, 100),
    (504, 300),
    (604, 10),
    (605, 10),
    (1004, 100),
    (1005, 100),
    (1006, 100),
    (700, 30),
    (1061, 10),
    (1070, 100),
    (1100, 2),
    (1200, 20),
    (1201, 10),
    (1202, 10),
    (1203, 20),
    (1204, 20),
    (1205, 100),
    (1206, 20),
    (1207, 20),
    (1208, 20),
];

/// V2 user functions repriced in V3.
const V3_USER_REPRICINGS: &[(&str, u64)] = &[
    ("throw", 1),
    ("isDefined", 1),
    ("!=", 1),
    ("!", 1),
    ("-", 1),
];

/// Nullary constructors for simple types, free to instantiate.
const V3_TYPE_CONSTRUCTORS: &[(&str, u64)] = &[
    ("Ceiling", 0),
    ("Floor", 0),
    ("HalfEven", 0),
    ("Down", 0),
    ("Up", 0),
    ("HalfUp", 0),
    ("HalfDown", 0),
    ("NoAlg", 0),
    ("Md5", 0),
    ("Sha1", 0),
    ("Sha224", 0),
    ("Sha256", 0),
    ("Sha384", 0),
    ("Sha512", 0),
    ("Sha3224", 0),
    ("Sha3256", 0),
    ("Sha3384", 0),
    ("Sha3512", 0),
    ("Unit", 0),
];

/// User functions introduced in V3. The `@extr…` forwarders mirror the
/// costs of the natives and user functions they wrap.
const V3_USER_EXTENSIONS: &[(&str, u64)] = &[
    ("@extrNative(1040)", 10),
    ("@extrNative(1041)", 10),
    ("@extrNative(1042)", 10),
    ("@extrNative(1043)", 10),
    ("@extrNative(1050)", 100),
    ("@extrNative(1051)", 100),
    ("@extrNative(1052)", 100),
    ("@extrNative(1053)", 100),
    ("@extrUser(getInteger)", 10),
    ("@extrUser(getBoolean)", 10),
    ("@extrUser(getBinary)", 10),
    ("@extrUser(getString)", 10),
    ("@extrUser(addressFromString)", 124),
    ("parseIntValue", 20),
    ("value", 13),
    ("valueOrErrorMessage", 13),
];

/// Immutable cost tables for one library version.
///
/// Built-in functions are addressed by numeric opcode, user functions by
/// name. A catalogue is constructed once per version and never mutated;
/// it is freely shareable between estimators.
#[derive(Debug, Clone)]
pub struct CostCatalogue {
    native: HashMap<i16, u64>,
    user: HashMap<&'static str, u64>,
}

impl CostCatalogue {
    /// Cost tables for V2 scripts.
    pub fn v2() -> CostCatalogue {
        CostCatalogue {
            native: V2_NATIVE_COSTS.iter().copied().collect(),
            user: V2_USER_COSTS.iter().copied().collect(),
        }
    }

    /// Cost tables for V3 scripts: the V2 tables extended with the V3
    /// functions, with a handful of user functions repriced.
    pub fn v3() -> CostCatalogue {
        let mut catalogue = CostCatalogue::v2();
        catalogue.native.extend(V3_NATIVE_EXTENSIONS.iter().copied());
        catalogue.user.extend(V3_USER_REPRICINGS.iter().copied());
        catalogue.user.extend(V3_TYPE_CONSTRUCTORS.iter().copied());
        catalogue.user.extend(V3_USER_EXTENSIONS.iter().copied());
        catalogue
    }

    /// Cost tables for the given library version.
    pub fn for_version(version: RideVersion) -> CostCatalogue {
        match version {
            RideVersion::V2 => CostCatalogue::v2(),
            RideVersion::V3 => CostCatalogue::v3(),
        }
    }

    /// Cost of the built-in function with the given opcode, if known.
    pub fn native_cost(&self, function_id: i16) -> Option<u64> {
        self.native.get(&function_id).copied()
    }

    /// Cost of the named user function, if known.
    pub fn user_cost(&self, name: &str) -> Option<u64> {
        self.user.get(name).copied()
    }
}
