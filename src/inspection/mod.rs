/// Falsy-to-default field accessors over decoded reports
pub mod extract;
/// Shape check and Python literal rewriting
pub mod normalize;
/// Inspection records and the report parser
pub mod report;
