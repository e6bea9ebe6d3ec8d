mod builder;
mod constructors;
