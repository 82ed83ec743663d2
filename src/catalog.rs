//! Bodies and materials loaded from TOML.
//!
//! ```toml
//! [bodies.Kerbin]
//! mass_kg = 5.2916e22
//! equatorial_radius_km = 600.0
//! parent = "Sun"
//! semi_major_axis_km = 1.36e7
//! eccentricity = 0.0
//! rotation_period_h = 6.0
//!
//! [materials.regolith]
//! density_kg_m3 = 1500.0
//! ```
//!
//! A `parent` names another catalog entry or one of the built-in
//! [`crate::tables::BODIES`].

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use crate::bodies::{CelestialBody, Material, Orbit, Rotation};
use crate::error::{CatalogError, PhysicsError, Result};
use crate::orbits::check_eccentricity;
use crate::quantity::Quantity;
use crate::stellar::check_albedo;
use crate::tables;
use crate::units::{
    DEGREE, HOUR, KILOGRAM, KILOGRAM_PER_CUBIC_METER, KILOMETER, MEGAPASCAL,
};

#[derive(serde::Deserialize, Clone, Debug)]
struct SerializedBody {
    mass_kg: f64,
    equatorial_radius_km: f64,
    polar_radius_km: Option<f64>,
    #[serde(default)]
    bond_albedo: f64,
    parent: Option<String>,
    semi_major_axis_km: Option<f64>,
    #[serde(default)]
    eccentricity: f64,
    mean_anomaly_deg: Option<f64>,
    #[serde(default)]
    inclination_deg: f64,
    ascending_node_deg: Option<f64>,
    periapsis_deg: Option<f64>,
    rotation_period_h: Option<f64>,
    #[serde(default)]
    axial_tilt_deg: f64,
    moment_of_inertia: Option<f64>,
}

#[derive(serde::Deserialize, Clone, Debug)]
struct SerializedMaterial {
    density_kg_m3: f64,
    yield_strength_mpa: Option<f64>,
}

#[derive(serde::Deserialize, Clone, Debug, Default)]
struct SerializedCatalog {
    #[serde(default)]
    bodies: BTreeMap<String, SerializedBody>,
    #[serde(default)]
    materials: BTreeMap<String, SerializedMaterial>,
}

#[derive(Clone, Copy)]
enum ParentRef {
    /// Index into the catalog's resolution order.
    Catalog(usize),
    Builtin(&'static CelestialBody<'static>),
}

/// Validated orbital elements waiting for their parent's final address.
struct StagedOrbit {
    parent: ParentRef,
    semi_major_axis: Quantity,
    eccentricity: f64,
    mean_anomaly: Option<Quantity>,
    inclination: Quantity,
    ascending_node: Option<Quantity>,
    periapsis: Option<Quantity>,
}

/// A fully validated body whose orbit, if any, is not yet linked.
struct StagedBody {
    body: CelestialBody<'static>,
    orbit: Option<StagedOrbit>,
}

/// Resolved catalog.
///
/// Orbits borrow their parents for `'static`, so every successful
/// [`Catalog::from_toml`] leaks its bodies for the rest of the process.
/// Nothing is leaked when loading fails. Load a catalog once.
#[derive(Debug, Default)]
pub struct Catalog {
    bodies: Vec<&'static CelestialBody<'static>>,
    materials: BTreeMap<String, Material>,
}

impl Catalog {
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let serialized: SerializedCatalog = toml::from_str(source)?;

        for (name, body) in &serialized.bodies {
            if let Some(parent) = &body.parent {
                if !serialized.bodies.contains_key(parent) && tables::find_body(parent).is_none() {
                    return Err(CatalogError::UnknownParent {
                        body: name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }

        // Validate everything in parent order before anything is leaked.
        let mut positions: BTreeMap<&str, usize> = BTreeMap::new();
        let mut staged: Vec<StagedBody> = Vec::with_capacity(serialized.bodies.len());
        let mut pending: BTreeSet<&str> = serialized.bodies.keys().map(String::as_str).collect();
        while !pending.is_empty() {
            let ready: Vec<&str> = pending
                .iter()
                .copied()
                .filter(|name| match &serialized.bodies[*name].parent {
                    None => true,
                    Some(parent) => {
                        positions.contains_key(parent.as_str())
                            || !serialized.bodies.contains_key(parent)
                    }
                })
                .collect();
            if ready.is_empty() {
                return Err(CatalogError::ParentCycle {
                    body: pending.first().map(|name| name.to_string()).unwrap_or_default(),
                });
            }
            for name in ready {
                let body = &serialized.bodies[name];
                let parent = body.parent.as_deref().and_then(|parent| {
                    positions
                        .get(parent)
                        .map(|&index| ParentRef::Catalog(index))
                        .or_else(|| tables::find_body(parent).map(ParentRef::Builtin))
                });
                let body = resolve_body(name, body, parent).map_err(|source| {
                    CatalogError::Invalid {
                        name: name.to_string(),
                        source,
                    }
                })?;
                positions.insert(name, staged.len());
                staged.push(body);
                pending.remove(name);
            }
        }

        let materials = serialized
            .materials
            .iter()
            .map(|(name, material)| {
                resolve_material(material)
                    .map(|material| (name.clone(), material))
                    .map_err(|source| CatalogError::Invalid {
                        name: name.clone(),
                        source,
                    })
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        let mut bodies: Vec<&'static CelestialBody<'static>> = Vec::with_capacity(staged.len());
        for StagedBody { mut body, orbit } in staged {
            body.orbit = orbit.map(|orbit| Orbit {
                parent: match orbit.parent {
                    // Parents are staged, and therefore leaked, first.
                    ParentRef::Catalog(index) => bodies[index],
                    ParentRef::Builtin(parent) => parent,
                },
                semi_major_axis: orbit.semi_major_axis,
                eccentricity: orbit.eccentricity,
                mean_anomaly: orbit.mean_anomaly,
                inclination: orbit.inclination,
                ascending_node: orbit.ascending_node,
                periapsis: orbit.periapsis,
            });
            bodies.push(Box::leak(Box::new(body)));
        }

        log::debug!(
            "loaded catalog with {} bodies and {} materials",
            bodies.len(),
            materials.len()
        );
        Ok(Self { bodies, materials })
    }

    pub fn body(&self, name: &str) -> Option<&'static CelestialBody<'static>> {
        self.bodies.iter().copied().find(|body| body.name == name)
    }

    pub fn material(&self, name: &str) -> Option<Material> {
        self.materials.get(name).copied()
    }

    /// Bodies with every parent ahead of its satellites.
    pub fn bodies(&self) -> &[&'static CelestialBody<'static>] {
        &self.bodies
    }
}

fn resolve_body(name: &str, body: &SerializedBody, parent: Option<ParentRef>) -> Result<StagedBody> {
    const OP: &str = "Catalog::from_toml";
    let mass = Quantity::new(body.mass_kg, KILOGRAM).positive(OP, "mass")?;
    let equatorial_radius =
        Quantity::new(body.equatorial_radius_km, KILOMETER).positive(OP, "equatorial radius")?;
    let polar_radius = match body.polar_radius_km {
        Some(km) => Quantity::new(km, KILOMETER).positive(OP, "polar radius")?,
        None => {
            log::warn!("{name}: no polar radius, assuming a sphere");
            equatorial_radius
        }
    };
    let bond_albedo = check_albedo(OP, body.bond_albedo)?;

    let orbit = match parent {
        None => None,
        Some(parent) => {
            let semi_major_axis_km = body.semi_major_axis_km.ok_or_else(|| {
                PhysicsError::MissingElement {
                    body: name.to_string(),
                    element: "semi-major axis",
                }
            })?;
            Some(StagedOrbit {
                parent,
                semi_major_axis: Quantity::new(semi_major_axis_km, KILOMETER)
                    .positive(OP, "semi-major axis")?,
                eccentricity: check_eccentricity(OP, body.eccentricity)?,
                mean_anomaly: body.mean_anomaly_deg.map(|deg| Quantity::new(deg, DEGREE)),
                inclination: Quantity::new(body.inclination_deg, DEGREE),
                ascending_node: body.ascending_node_deg.map(|deg| Quantity::new(deg, DEGREE)),
                periapsis: body.periapsis_deg.map(|deg| Quantity::new(deg, DEGREE)),
            })
        }
    };

    let rotation = match body.rotation_period_h {
        None => None,
        Some(hours) => Some(Rotation {
            moment_of_inertia: body.moment_of_inertia,
            rotation_period: Quantity::new(hours, HOUR).positive(OP, "rotation period")?,
            axial_tilt: Quantity::new(body.axial_tilt_deg, DEGREE),
        }),
    };

    Ok(StagedBody {
        body: CelestialBody {
            name: Cow::Owned(name.to_string()),
            mass,
            equatorial_radius,
            polar_radius,
            bond_albedo,
            orbit: None,
            rotation,
        },
        orbit,
    })
}

fn resolve_material(material: &SerializedMaterial) -> Result<Material> {
    const OP: &str = "Catalog::from_toml";
    let density =
        Quantity::new(material.density_kg_m3, KILOGRAM_PER_CUBIC_METER).positive(OP, "density")?;
    let yield_strength = match material.yield_strength_mpa {
        Some(mpa) => Some(Quantity::new(mpa, MEGAPASCAL).positive(OP, "yield strength")?),
        None => None,
    };
    Ok(Material::new(density, yield_strength))
}
