//! Fields and bodies owned by a driver.

use indexmap::IndexMap;
use tidepool_body::BuoyantBody;
use tidepool_core::{BodyId, FieldId, WaveError};
use tidepool_field::WaveField;

/// Named wave fields plus the bodies floating on them.
///
/// Field ids are assigned sequentially in insertion order and double as
/// the index into the name map, so iteration order is stable and
/// deterministic.
///
/// # Examples
///
/// ```
/// use tidepool_engine::Scene;
/// use tidepool_field::WaveField;
///
/// let mut scene = Scene::new();
/// let near = scene.add_field("near", WaveField::builder().build().unwrap()).unwrap();
/// let far = scene.add_field("far", WaveField::builder().build().unwrap()).unwrap();
/// assert_eq!(scene.field_id("far"), Some(far));
/// assert_eq!(scene.field_names().collect::<Vec<_>>(), ["near", "far"]);
/// assert!(scene.field(near).is_some());
/// ```
#[derive(Debug, Default)]
pub struct Scene {
    fields: IndexMap<String, WaveField>,
    bodies: Vec<BuoyantBody>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field under a unique `name`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] if the name is taken.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        field: WaveField,
    ) -> Result<FieldId, WaveError> {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return Err(WaveError::config(format!("duplicate field name '{name}'")));
        }
        let id = FieldId(self.fields.len() as u32);
        log::debug!("field {id} '{name}': {} samples", field.len());
        self.fields.insert(name, field);
        Ok(id)
    }

    /// Add a body. Its field must already be in the scene.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] if the body names a
    /// field this scene does not hold.
    pub fn add_body(&mut self, body: BuoyantBody) -> Result<BodyId, WaveError> {
        if !self.contains_field(body.field()) {
            return Err(WaveError::config(format!(
                "body references unknown field {}",
                body.field()
            )));
        }
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(body);
        Ok(id)
    }

    /// Whether `id` names a field in this scene.
    pub fn contains_field(&self, id: FieldId) -> bool {
        (id.0 as usize) < self.fields.len()
    }

    /// Look up a field id by name.
    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        self.fields.get_index_of(name).map(|i| FieldId(i as u32))
    }

    /// Name of a field.
    pub fn field_name(&self, id: FieldId) -> Option<&str> {
        self.fields.get_index(id.0 as usize).map(|(k, _)| k.as_str())
    }

    /// Borrow a field.
    pub fn field(&self, id: FieldId) -> Option<&WaveField> {
        self.fields.get_index(id.0 as usize).map(|(_, f)| f)
    }

    /// Borrow a field mutably.
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut WaveField> {
        self.fields.get_index_mut(id.0 as usize).map(|(_, f)| f)
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields with their ids, in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &WaveField)> {
        self.fields
            .values()
            .enumerate()
            .map(|(i, f)| (FieldId(i as u32), f))
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut WaveField> {
        self.fields.values_mut()
    }

    /// Borrow a body.
    pub fn body(&self, id: BodyId) -> Option<&BuoyantBody> {
        self.bodies.get(id.0 as usize)
    }

    /// Borrow a body mutably (for example to mark it ready).
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut BuoyantBody> {
        self.bodies.get_mut(id.0 as usize)
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> &[BuoyantBody] {
        &self.bodies
    }

    /// Run one physics step on every body against its own field.
    ///
    /// Returns how many bodies were ready and moved.
    pub(crate) fn run_physics(&mut self, dt: f64) -> u32 {
        let Self { fields, bodies } = self;
        let mut active = 0;
        for body in bodies.iter_mut() {
            let Some((_, field)) = fields.get_index(body.field().0 as usize) else {
                continue;
            };
            if body.physics(field, dt) {
                active += 1;
            }
        }
        active
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidepool_field::SurfaceMapping;

    fn field() -> WaveField {
        WaveField::builder().samples(20).build().unwrap()
    }

    fn body(field: FieldId) -> BuoyantBody {
        BuoyantBody::builder(field, SurfaceMapping::new(400.0, 200.0).unwrap())
            .position(200.0, 150.0)
            .ready(true)
            .build()
            .unwrap()
    }

    #[test]
    fn ids_are_sequential() {
        let mut s = Scene::new();
        assert_eq!(s.add_field("a", field()).unwrap(), FieldId(0));
        assert_eq!(s.add_field("b", field()).unwrap(), FieldId(1));
        assert_eq!(s.field_name(FieldId(1)), Some("b"));
        assert_eq!(s.field_count(), 2);
        assert!(s.field(FieldId(2)).is_none());
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut s = Scene::new();
        s.add_field("pond", field()).unwrap();
        assert!(s.add_field("pond", field()).is_err());
        assert_eq!(s.field_count(), 1);
    }

    #[test]
    fn body_needs_known_field() {
        let mut s = Scene::new();
        assert!(s.add_body(body(FieldId(0))).is_err());
        let id = s.add_field("pond", field()).unwrap();
        assert_eq!(s.add_body(body(id)).unwrap(), BodyId(0));
        assert_eq!(s.body_count(), 1);
    }

    #[test]
    fn physics_reads_the_bodys_field() {
        let mut s = Scene::new();
        let id = s.add_field("pond", field()).unwrap();
        s.add_body(body(id)).unwrap();
        let before = s.field(id).unwrap().state_hash();
        assert_eq!(s.run_physics(0.01), 1);
        assert_eq!(s.field(id).unwrap().state_hash(), before);
        assert!(s.body(BodyId(0)).unwrap().pose().py > 150.0);
    }
}
