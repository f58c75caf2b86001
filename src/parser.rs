use crate::{
    bounds::{Bounds, Field, DOMS, DOWS, HOURS, MINUTES, MONTHS, SECONDS},
    duration,
    location::Location,
    mask::FieldMask,
    options::{ParseOption, ParseOptions},
    pattern,
    schedule::{ConstantDelaySchedule, Schedule, SpecSchedule},
    CronError, Result,
};
use log::{debug, trace};

const TZ_PREFIXES: [&str; 2] = ["TZ=", "CRON_TZ="];
const EVERY: &str = "@every ";

/// Configurable cron spec compiler.
///
/// Parser is cheap to copy and holds no state besides its configuration,
/// so a single instance may be shared between threads freely.
///
/// # Examples
/// ```rust
/// use cron_spec::{ParseOption, Parser, Result};
///
/// fn subset() -> Result<()> {
///     // Days only, day of week may be omitted
///     let parser = Parser::new(&[ParseOption::Dom, ParseOption::Month, ParseOption::DowOptional])?;
///     let schedule = parser.parse("15 */3")?;
///
///     let spec = schedule.as_spec().unwrap();
///     assert_eq!(spec.dom().values().collect::<Vec<_>>(), vec![15]);
///     assert!(spec.dow().is_wildcard());
///
///     Ok(())
/// }
/// # subset().unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// Creates parser with a custom set of options.
    ///
    /// Returns [`CronError::MultipleOptionals`] if both `SecondOptional` and `DowOptional` are requested,
    /// since it would be impossible to infer which field is omitted.
    pub fn new(options: &[ParseOption]) -> Result<Self> {
        Ok(Self::with_options(ParseOptions::new(options)?))
    }

    /// Creates parser with already validated options.
    #[inline]
    pub const fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Standard crontab parser: five fields (minute, hour, day of month, month, day of week) and descriptors.
    #[inline]
    pub const fn standard() -> Self {
        Self::with_options(ParseOptions::STANDARD)
    }

    /// Parser configuration.
    #[inline]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Compiles the spec into a schedule.
    ///
    /// Accepts specs like `[TZ=<name> | CRON_TZ=<name>] (<descriptor> | <field> ... <field>)`
    /// with the number of fields defined by the parser options.
    pub fn parse(&self, spec: &str) -> Result<Schedule> {
        if spec.is_empty() {
            return Err(CronError::EmptySpec);
        }

        let (location, spec) = extract_location(spec)?;

        if spec.starts_with('@') {
            if !self.options.descriptors() {
                return Err(CronError::DescriptorsNotAccepted(spec.to_owned()));
            }
            return parse_descriptor(spec, location);
        }

        let fields = spec.split_whitespace().collect::<Vec<_>>();
        let fields = self.options.normalize(&fields)?;

        let mut masks = [FieldMask::default(); 6];
        for field in Field::ALL {
            let expr = fields[field.index()];
            let mask = pattern::compile(expr, &field.bounds())?;
            trace!("{field} field {expr:?} compiled to {mask}");
            masks[field.index()] = mask;
        }

        let schedule = SpecSchedule::from_masks(masks, location);
        debug!("compiled spec {spec:?} into {schedule}");

        Ok(schedule.into())
    }
}

/// Compiles a standard crontab spec.
///
/// It requires five fields: minute, hour, day of month, month and day of week, in that order.
/// Descriptors like `@midnight` or `@every 1h30m` are accepted as well as timezone prefix.
///
/// # Examples
/// ```rust
/// use cron_spec::{parse_standard, Result};
///
/// fn standard() -> Result<()> {
///     let schedule = parse_standard("TZ=UTC */15 9-17 * * MON-FRI")?;
///
///     let spec = schedule.as_spec().unwrap();
///     assert_eq!(spec.minute().values().collect::<Vec<_>>(), vec![0, 15, 30, 45]);
///     assert_eq!(spec.dow().values().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
///     assert_eq!(spec.location().to_string(), "UTC");
///
///     let every = parse_standard("@every 1h30m")?;
///     assert!(every.is_every());
///
///     Ok(())
/// }
/// # standard().unwrap();
/// ```
pub fn parse_standard(spec: &str) -> Result<Schedule> {
    Parser::standard().parse(spec)
}

/// Splits off the `TZ=` / `CRON_TZ=` prefix and resolves its location.
///
/// Returns the default (local) location and the untouched spec if there is no prefix.
fn extract_location(spec: &str) -> Result<(Location, &str)> {
    let Some(rest) = TZ_PREFIXES.iter().find_map(|prefix| spec.strip_prefix(*prefix)) else {
        return Ok((Location::default(), spec));
    };

    let (name, rest) = rest.split_once(' ').unwrap_or((rest, ""));
    let location = Location::load(name)?;
    let spec = rest.trim();
    if spec.is_empty() {
        return Err(CronError::EmptySpec);
    }

    Ok((location, spec))
}

/// Returns a predefined schedule for the descriptor.
fn parse_descriptor(descriptor: &str, location: Location) -> Result<Schedule> {
    let first = |bounds: &Bounds| FieldMask::single(bounds.min);
    let all = FieldMask::all;

    let masks = match descriptor {
        "@yearly" | "@annually" => [
            first(&SECONDS),
            first(&MINUTES),
            first(&HOURS),
            first(&DOMS),
            first(&MONTHS),
            all(&DOWS),
        ],
        "@monthly" => [
            first(&SECONDS),
            first(&MINUTES),
            first(&HOURS),
            first(&DOMS),
            all(&MONTHS),
            all(&DOWS),
        ],
        "@weekly" => [
            first(&SECONDS),
            first(&MINUTES),
            first(&HOURS),
            all(&DOMS),
            all(&MONTHS),
            first(&DOWS),
        ],
        "@daily" | "@midnight" => [
            first(&SECONDS),
            first(&MINUTES),
            first(&HOURS),
            all(&DOMS),
            all(&MONTHS),
            all(&DOWS),
        ],
        "@hourly" => [
            first(&SECONDS),
            first(&MINUTES),
            all(&HOURS),
            all(&DOMS),
            all(&MONTHS),
            all(&DOWS),
        ],
        _ => {
            let Some(delay) = descriptor.strip_prefix(EVERY) else {
                return Err(CronError::UnrecognizedDescriptor(descriptor.to_owned()));
            };
            let delay = duration::parse_duration(delay).map_err(|reason| CronError::InvalidDuration {
                descriptor: descriptor.to_owned(),
                reason,
            })?;
            let schedule = ConstantDelaySchedule::every(delay);
            debug!("compiled descriptor {descriptor:?} into {schedule}");
            return Ok(schedule.into());
        }
    };

    let schedule = SpecSchedule::from_masks(masks, location);
    debug!("compiled descriptor {descriptor:?} into {schedule}");

    Ok(schedule.into())
}
