use assert_that::Assertions;

#[derive(Debug, Assertions)]
pub struct Person {
    name: String,
    age: u32,
}

fn main() {
    let john = Person {
        name: "John".to_string(),
        age: 23,
    };

    PersonAssert::assert_that(&john).has_age(23).has_name("John");
}
